//! Collaborator traits the diff table is wired to.

mod extension_host;
mod hoverifier;
mod theme_provider;

pub use extension_host::{
    DecorationStream, ExtensionError, ExtensionHost, ExtensionHostApi, NoOpExtensionHost,
    ViewerIdObserver, ViewerIdStream,
};
pub use hoverifier::{
    ContextResolver, HoverContextError, HoverSubscription, HoveredToken, Hoverifier,
    HoverifyConfig, PositionJump, RepoSpec,
};
pub use theme_provider::{DefaultTheme, LightTheme, ThemeProvider};
