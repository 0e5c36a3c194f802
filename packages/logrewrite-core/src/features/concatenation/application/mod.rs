//! Application layer for message templates

mod message_usecase;

pub use message_usecase::{CallRewrite, MessageRewriteUseCase, MessageRewriter};
