pub mod code_fence;
pub mod delimiter;

pub use code_fence::CodeFence;
pub use delimiter::Delimiter;
