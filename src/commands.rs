//! Commands a view-model exposes to buttons: an action plus a guard that
//! decides whether the button is enabled.

use std::fmt;

pub struct RelayCommand<VM> {
    pub label: &'static str,
    /// Phosphor glyph shown in front of the label.
    pub icon: &'static str,
    execute: fn(&mut VM),
    can_execute: fn(&VM) -> bool,
}

impl<VM> RelayCommand<VM> {
    /// Command that is always enabled.
    pub fn new(label: &'static str, icon: &'static str, execute: fn(&mut VM)) -> Self {
        Self {
            label,
            icon,
            execute,
            can_execute: |_| true,
        }
    }

    pub fn with_guard(mut self, can_execute: fn(&VM) -> bool) -> Self {
        self.can_execute = can_execute;
        self
    }

    pub fn can_execute(&self, vm: &VM) -> bool {
        (self.can_execute)(vm)
    }

    /// Run the command if its guard allows it. Returns whether it ran.
    pub fn execute(&self, vm: &mut VM) -> bool {
        if !self.can_execute(vm) {
            return false;
        }
        tracing::info!(command = self.label, "command");
        (self.execute)(vm);
        true
    }

    /// Button caption: icon and label.
    pub fn caption(&self) -> String {
        if self.icon.is_empty() {
            self.label.to_owned()
        } else {
            format!("{} {}", self.icon, self.label)
        }
    }
}

impl<VM> Clone for RelayCommand<VM> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            icon: self.icon,
            execute: self.execute,
            can_execute: self.can_execute,
        }
    }
}

impl<VM> fmt::Debug for RelayCommand<VM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCommand")
            .field("label", &self.label)
            .finish()
    }
}

/// Implemented by view-models that publish a command list.
pub trait CommandSource: Sized {
    fn commands() -> Vec<RelayCommand<Self>>;

    /// Look a command up by label.
    fn command(label: &str) -> Option<RelayCommand<Self>> {
        Self::commands().into_iter().find(|c| c.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        n: u32,
    }

    #[test]
    fn guard_blocks_execution() {
        let inc = RelayCommand::new("inc", "", |c: &mut Counter| c.n += 1)
            .with_guard(|c| c.n < 2);
        let mut c = Counter::default();
        assert!(inc.execute(&mut c));
        assert!(inc.execute(&mut c));
        assert!(!inc.can_execute(&c));
        assert!(!inc.execute(&mut c));
        assert_eq!(c.n, 2);
    }

    #[test]
    fn caption_includes_icon() {
        let cmd = RelayCommand::new("Reset", "*", |_: &mut Counter| {});
        assert_eq!(cmd.caption(), "* Reset");
        assert_eq!(cmd.clone().label, "Reset");
    }
}
