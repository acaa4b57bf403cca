#![allow(
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    unnecessary_transmutes,
    clippy::approx_constant,
    clippy::missing_safety_doc,
    clippy::ptr_offset_with_cast
)]

mod error;
mod raii;

use std::sync::Once;

pub use error::*;
pub use raii::*;

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

/// Bring up the MagickWand environment once per process, unless something
/// else in the process already did
pub fn genesis() {
    static GENESIS: Once = Once::new();

    GENESIS.call_once(|| unsafe {
        if IsMagickWandInstantiated() == MagickBooleanType_MagickFalse {
            tracing::debug!("Starting MagickWand environment");
            MagickWandGenesis();
        }
    });
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_genesis_is_idempotent() {
        genesis();
        genesis();
        assert_eq!(
            unsafe { IsMagickWandInstantiated() },
            MagickBooleanType_MagickTrue
        );
    }

    #[test]
    fn test_handles_report_exceptions() {
        let wand = MagickHandle::new().unwrap();
        assert!(wand.exception().is_undefined());

        let path = c"/nonexistent/luamagick/input.png";
        let ok = unsafe { MagickReadImage(wand.as_ptr(), path.as_ptr()) };
        assert_eq!(ok, MagickBooleanType_MagickFalse);

        let err = wand.fail("MagickReadImage");
        assert!(!err.is_undefined());
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let pixel = PixelHandle::new().unwrap();
        let ok = unsafe { PixelSetColor(pixel.as_ptr(), c"red".as_ptr()) };
        assert_eq!(ok, MagickBooleanType_MagickTrue);

        let copy = pixel.try_clone().unwrap();
        drop(pixel);

        let red = unsafe { PixelGetRed(copy.as_ptr()) };
        assert!((red - 1.0).abs() < 1e-6);
    }
}
