pub mod data_selector;
pub mod selector_bar;

pub use data_selector::DataSelector;
pub use selector_bar::{
    SelectorBar, SelectorBarProps, SelectorCallbacks, SelectorChange, SelectorControl,
    SelectorHandlers, SelectorKind,
};
