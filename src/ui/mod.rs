pub mod animation;
pub mod app;
pub mod events;
pub mod footer;
pub mod greeting;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod onboarding;
pub mod render;
pub mod runtime;
pub mod shell;
pub mod terminal_guard;
pub mod theme;
pub mod view;
