//! Shared UI icons.
//!
//! Emoji constants with plain-text fallbacks for terminals that cannot
//! render them.

use console::Emoji;

// Step markers
pub static CHECK: Emoji<'_, '_> = Emoji("✔ ", "[ok] ");
pub static CIRCLE: Emoji<'_, '_> = Emoji("○ ", "[ ] ");
pub static ARROW: Emoji<'_, '_> = Emoji("▶ ", "[>] ");

// Outcome indicators
pub static CROSS: Emoji<'_, '_> = Emoji("✖ ", "[err] ");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "* ");
pub static DOWNLOAD: Emoji<'_, '_> = Emoji("⬇ ", "[dl] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[warn] ");
