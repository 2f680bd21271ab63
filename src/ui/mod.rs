pub mod app;
pub mod audio;
pub mod chrome;
pub mod entrance;
pub mod events;
pub mod footer;
pub mod gesture;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod overlay;
pub mod page;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
