//! Conversions between checked Lua arguments and MagickWand parameter and
//! return types

use std::ffi::{CString, c_char, c_uchar};

use magick_sys::{
    DrawingHandle, DrawingWand, MagickBooleanType, MagickBooleanType_MagickTrue, MagickHandle,
    MagickString, MagickStringList, MagickWand, PixelHandle, PixelWand, Wand,
};

use crate::prelude::*;

/// A drawing wand argument
pub type Drawing = UserDataRef<DrawingHandle>;
/// A magick wand argument
pub type Magick = UserDataRef<MagickHandle>;
/// A pixel wand argument
pub type Pixel = UserDataRef<PixelHandle>;

/// Lowering of an already-checked Lua argument into the native parameter
/// type `T`.  Numbers are cast with `as`, so out-of-range values saturate.
pub trait Marshal<T> {
    fn marshal(&self) -> T;
}

macro_rules! numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Marshal<$ty> for f64 {
                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::unnecessary_cast,
                )]
                fn marshal(&self) -> $ty { *self as $ty }
            }
        )*
    };
}

numeric!(f64, f32, usize, isize, u64, i64, u32, i32);

impl Marshal<MagickBooleanType> for bool {
    #[inline]
    fn marshal(&self) -> MagickBooleanType { MagickBooleanType::from(*self) }
}

/// A string argument, checked for interior NUL bytes
#[derive(Debug, Clone)]
pub struct Text(CString);

impl Text {
    #[inline]
    #[must_use]
    pub fn as_ptr(&self) -> *const c_char { self.0.as_ptr() }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize { self.0.as_bytes().len() }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.as_bytes().is_empty() }
}

impl FromLua for Text {
    fn from_lua(value: Value, lua: &Lua) -> LuaResult<Self> {
        let s = LuaString::from_lua(value, lua)?;
        CString::new(s.as_bytes().to_vec())
            .map(Self)
            .map_err(LuaError::external)
    }
}

impl Marshal<*const c_char> for Text {
    #[inline]
    fn marshal(&self) -> *const c_char { self.0.as_ptr() }
}

impl Marshal<*const c_uchar> for Text {
    #[inline]
    fn marshal(&self) -> *const c_uchar { self.0.as_ptr().cast() }
}

macro_rules! handle {
    ($($handle:ty => $raw:ty),* $(,)?) => {
        $(
            impl Marshal<*mut $raw> for UserDataRef<$handle> {
                #[inline]
                fn marshal(&self) -> *mut $raw { self.as_ptr() }
            }

            impl Marshal<*const $raw> for UserDataRef<$handle> {
                #[inline]
                fn marshal(&self) -> *const $raw { self.as_ptr().cast_const() }
            }
        )*
    };
}

handle!(
    DrawingHandle => DrawingWand,
    MagickHandle => MagickWand,
    PixelHandle => PixelWand,
);

/// Either a successful result or the `nil, message` pair Lua callers check
/// for
#[derive(Debug)]
pub enum Outcome<T> {
    Done(T),
    Failed(magick_sys::Error),
}

impl<T: IntoLuaMulti> IntoLuaMulti for Outcome<T> {
    fn into_lua_multi(self, lua: &Lua) -> LuaResult<LuaMultiValue> {
        match self {
            Self::Done(v) => v.into_lua_multi(lua),
            Self::Failed(e) => (Value::Nil, e.to_string()).into_lua_multi(lua),
        }
    }
}

impl<T> Outcome<T> {
    /// Succeed with `value` if `ret` is `MagickTrue`, otherwise report the
    /// exception currently held by `wand`
    pub fn check<W: Wand>(wand: &W, ret: MagickBooleanType, native: &str, value: T) -> Self {
        if ret == MagickBooleanType_MagickTrue {
            Self::Done(value)
        } else {
            Self::Failed(wand.fail(native))
        }
    }
}

#[inline]
pub fn status<W: Wand>(wand: &W, ret: MagickBooleanType, native: &str) -> Outcome<bool> {
    Outcome::check(wand, ret, native, true)
}

#[inline]
#[must_use]
pub fn flag(ret: MagickBooleanType) -> bool { ret == MagickBooleanType_MagickTrue }

/// Take ownership of a wand the library just handed back
pub fn wrap<W: Wand, H: Wand + 'static>(
    lua: &Lua,
    owner: &W,
    raw: *mut H::Raw,
    native: &str,
) -> LuaResult<Outcome<LuaAnyUserData>> {
    match unsafe { H::from_raw(raw) } {
        Some(handle) => lua.create_any_userdata(handle).map(Outcome::Done),
        None => Ok(Outcome::Failed(owner.fail(native))),
    }
}

/// Copy out and release a string the library allocated, or `nil` for NULL
pub fn string(lua: &Lua, raw: *mut c_char) -> LuaResult<Option<LuaString>> {
    unsafe { MagickString::from_raw(raw) }
        .map(|s| lua.create_string(s.to_bytes()))
        .transpose()
}

/// Copy out and release a string list as a sequence of Lua strings
pub fn strings(lua: &Lua, raw: *mut *mut c_char, len: usize) -> LuaResult<Vec<LuaString>> {
    let Some(list) = (unsafe { MagickStringList::from_raw(raw, len) }) else {
        return Ok(vec![]);
    };

    list.iter().map(|s| lua.create_string(s.to_bytes())).collect()
}

/// Check a flat `{x1, y1, x2, y2, ...}` coordinate array
pub fn points(coords: &[f64]) -> LuaResult<Vec<magick_sys::PointInfo>> {
    if coords.len() % 2 != 0 {
        return Err(LuaError::runtime(format!(
            "coordinate array must have an even length, got {}",
            coords.len()
        )));
    }

    Ok(coords
        .chunks_exact(2)
        .map(|c| magick_sys::PointInfo { x: c[0], y: c[1] })
        .collect())
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    proptest::proptest! {
        #[test]
        fn test_number_casts(n in -1.0e12_f64..1.0e12) {
            let as_f32: f32 = n.marshal();
            let as_isize: isize = n.marshal();
            let as_usize: usize = n.marshal();

            #[allow(clippy::cast_possible_truncation)]
            let expect_f32 = n as f32;
            prop_assert_eq!(as_f32.to_bits(), expect_f32.to_bits());
            prop_assert_eq!(as_isize, n.trunc() as isize);

            if n < 0.0 {
                prop_assert_eq!(as_usize, 0);
            } else {
                prop_assert_eq!(as_usize, n.trunc() as usize);
            }
        }

        #[test]
        fn test_points_pair_up(v in prop::collection::vec(-1.0e6_f64..1.0e6, 0..64)) {
            let res = points(&v);

            if v.len() % 2 == 0 {
                let pts = res.unwrap();
                prop_assert_eq!(pts.len(), v.len() / 2);

                for (p, c) in pts.iter().zip(v.chunks_exact(2)) {
                    prop_assert_eq!(p.x.to_bits(), c[0].to_bits());
                    prop_assert_eq!(p.y.to_bits(), c[1].to_bits());
                }
            } else {
                prop_assert!(res.is_err());
            }
        }
    }

    #[test]
    fn test_flags() {
        let t: MagickBooleanType = true.marshal();
        let f: MagickBooleanType = false.marshal();

        assert!(flag(t));
        assert!(!flag(f));
    }

    #[test]
    fn test_text_rejects_nul() {
        let lua = Lua::new();

        let ok: Text = lua.load(r#"return "hello""#).eval().unwrap();
        assert_eq!(ok.len(), 5);

        let num: Text = lua.load("return 42").eval().unwrap();
        assert_eq!(num.len(), 2);

        let bad: LuaResult<Text> = lua.load(r#"return "a\0b""#).eval();
        assert!(bad.is_err());
    }
}
