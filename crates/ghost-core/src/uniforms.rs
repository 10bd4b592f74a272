// Uniform and attribute names shared with the page's shader sources.

pub const A_POSITION: &str = "a_position";

pub const U_TIME: &str = "u_time";
pub const U_RATIO: &str = "u_ratio";

// ghost
pub const U_POINTER: &str = "u_pointer";
pub const U_TARGET_POINTER: &str = "u_target_pointer";
pub const U_SMILE: &str = "u_smile";
pub const U_SIZE: &str = "u_size";
pub const U_TEXTURE: &str = "u_texture";
pub const U_MAIN_COLOR: &str = "u_main_color";
pub const U_BORDER_COLOR: &str = "u_border_color";
pub const U_FLAT_COLOR: &str = "u_flat_color";

// neuro
pub const U_POINTER_POSITION: &str = "u_pointer_position";
pub const U_SCROLL_PROGRESS: &str = "u_scroll_progress";

/// Active-uniform names for arrays come back as `name[0]`; index them by
/// the bare name.
#[inline]
pub fn uniform_base_name(active_name: &str) -> &str {
    active_name.strip_suffix("[0]").unwrap_or(active_name)
}
