use std::fmt;

/// A handle family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `DrawingWand`
    Drawing,
    /// `MagickWand`
    Magick,
    /// `PixelWand`
    Pixel,
}

impl Family {
    /// Every family, in registration order
    pub const ALL: [Family; 3] = [Self::Drawing, Self::Magick, Self::Pixel];
}

/// How much of the MagickWand API a loaded module exposes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Surface {
    /// Every bound method, the module helpers, and the enum constant tables
    #[default]
    Full,
    /// Every method except the font-metric queries and `distort_image`;
    /// module helpers but no constant tables
    Compact,
    /// A small set of everyday operations and the three constructors
    Lite,
}

const FULL_ONLY: &[(Family, &str)] = &[
    (Family::Magick, "distort_image"),
    (Family::Magick, "query_font_metrics"),
    (Family::Magick, "query_multiline_font_metrics"),
];

const LITE: &[(Family, &str)] = &[
    (Family::Drawing, "annotation"),
    (Family::Drawing, "circle"),
    (Family::Drawing, "clear"),
    (Family::Drawing, "clear_exception"),
    (Family::Drawing, "clone"),
    (Family::Drawing, "line"),
    (Family::Drawing, "pop_graphic_context"),
    (Family::Drawing, "push_graphic_context"),
    (Family::Drawing, "rectangle"),
    (Family::Drawing, "round_rectangle"),
    (Family::Drawing, "set_fill_color"),
    (Family::Drawing, "set_font"),
    (Family::Drawing, "set_font_size"),
    (Family::Drawing, "set_gravity"),
    (Family::Drawing, "set_stroke_color"),
    (Family::Drawing, "set_stroke_width"),
    (Family::Drawing, "set_text_antialias"),
    (Family::Magick, "annotate_image"),
    (Family::Magick, "blur_image"),
    (Family::Magick, "clear"),
    (Family::Magick, "clear_exception"),
    (Family::Magick, "clone"),
    (Family::Magick, "coalesce_images"),
    (Family::Magick, "composite_image"),
    (Family::Magick, "crop_image"),
    (Family::Magick, "draw_image"),
    (Family::Magick, "extent_image"),
    (Family::Magick, "flip_image"),
    (Family::Magick, "flop_image"),
    (Family::Magick, "get_image"),
    (Family::Magick, "get_image_blob"),
    (Family::Magick, "get_image_format"),
    (Family::Magick, "get_image_height"),
    (Family::Magick, "get_image_pixel_color"),
    (Family::Magick, "get_image_width"),
    (Family::Magick, "get_number_images"),
    (Family::Magick, "has_next_image"),
    (Family::Magick, "new_image"),
    (Family::Magick, "next_image"),
    (Family::Magick, "read_image"),
    (Family::Magick, "read_image_blob"),
    (Family::Magick, "reset_image_page"),
    (Family::Magick, "reset_iterator"),
    (Family::Magick, "resize_image"),
    (Family::Magick, "rotate_image"),
    (Family::Magick, "scale_image"),
    (Family::Magick, "set_background_color"),
    (Family::Magick, "set_first_iterator"),
    (Family::Magick, "set_image_alpha_channel"),
    (Family::Magick, "set_image_background_color"),
    (Family::Magick, "set_image_compression_quality"),
    (Family::Magick, "set_image_format"),
    (Family::Magick, "set_image_page"),
    (Family::Magick, "strip_image"),
    (Family::Magick, "thumbnail_image"),
    (Family::Magick, "trim_image"),
    (Family::Magick, "write_image"),
    (Family::Magick, "write_images"),
    (Family::Pixel, "clear"),
    (Family::Pixel, "clear_exception"),
    (Family::Pixel, "clone"),
    (Family::Pixel, "get_alpha"),
    (Family::Pixel, "get_blue"),
    (Family::Pixel, "get_color_as_string"),
    (Family::Pixel, "get_green"),
    (Family::Pixel, "get_red"),
    (Family::Pixel, "set_alpha"),
    (Family::Pixel, "set_color"),
];

fn listed(list: &[(Family, &str)], family: Family, name: &str) -> bool {
    list.iter().any(|&(f, n)| f == family && n == name)
}

impl Surface {
    /// Every surface, widest first
    pub const ALL: [Surface; 3] = [Self::Full, Self::Compact, Self::Lite];

    /// Whether the method `name` of `family` is registered under this
    /// surface
    #[must_use]
    pub fn includes(self, family: Family, name: &str) -> bool {
        match self {
            Self::Full => true,
            Self::Compact => !listed(FULL_ONLY, family, name),
            Self::Lite => listed(LITE, family, name),
        }
    }

    /// Whether the module table carries the enum constant tables
    #[inline]
    #[must_use]
    pub fn has_constants(self) -> bool { matches!(self, Self::Full) }

    /// Whether the module table carries the library-level helpers
    /// (`version`, `query_formats`, resource limits, ...)
    #[inline]
    #[must_use]
    pub fn has_helpers(self) -> bool { !matches!(self, Self::Lite) }

    /// The name scripts and the command line use for this surface
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Compact => "compact",
            Self::Lite => "lite",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::method_names;

    #[test]
    fn test_lite_names_exist() {
        for &(family, name) in LITE {
            assert!(
                method_names(family).any(|n| n == name),
                "{family:?} has no method {name:?}"
            );
        }
    }

    #[test]
    fn test_full_only_names_exist() {
        for &(family, name) in FULL_ONLY {
            assert!(method_names(family).any(|n| n == name));
            assert!(Surface::Full.includes(family, name));
            assert!(!Surface::Compact.includes(family, name));
            assert!(!Surface::Lite.includes(family, name));
        }
    }

    #[test]
    fn test_surfaces_nest() {
        for family in Family::ALL {
            for name in method_names(family) {
                if Surface::Lite.includes(family, name) {
                    assert!(Surface::Compact.includes(family, name));
                }

                if Surface::Compact.includes(family, name) {
                    assert!(Surface::Full.includes(family, name));
                }
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        for family in Family::ALL {
            let mut names: Vec<_> = method_names(family).collect();
            let len = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(len, names.len(), "duplicate method names in {family:?}");
        }
    }
}
