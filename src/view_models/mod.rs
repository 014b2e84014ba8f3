//! View-models: one per demo. Each owns its series, listens to the series'
//! events and publishes a command list for the panel's toolbar.

pub mod clickable_vm;
pub mod parallel_vm;
pub mod rect_selection_vm;
pub mod scatter_line_vm;

pub use clickable_vm::ClickableScatterViewModel;
pub use parallel_vm::ParallelCoordinatesViewModel;
pub use rect_selection_vm::{RectSelectionViewModel, SelectedPointInfo};
pub use scatter_line_vm::ScatterLineViewModel;
