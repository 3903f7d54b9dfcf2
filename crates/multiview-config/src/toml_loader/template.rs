//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Multiview Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[session]
# max_streams = 16       # 1-16

[youtube]
# target_origin = "https://www.youtube.com"

[chat]
# Which chat to show when every stream is muted:
#   "most_viewers" -- highest viewer count, else the first tile
#   "first_slot"   -- always the first tile
# fallback = "most_viewers"

[logging]
# level = "info"         # debug, info, warn, error
"##
}
