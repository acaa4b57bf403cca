use std::{
    ffi::{CStr, c_char},
    fmt,
    ptr::NonNull,
};

use tracing::trace;

use crate::{
    CloneDrawingWand, CloneMagickWand, ClonePixelWand, DestroyDrawingWand, DestroyMagickWand,
    DestroyPixelWand, DrawGetException, DrawingWand, Error, ExceptionType,
    ExceptionType_UndefinedException, MagickGetException, MagickRelinquishMemory, MagickWand,
    NewDrawingWand, NewMagickWand, NewPixelWand, PixelGetException, PixelWand,
};

/// Common surface of the three owned wand handles
pub trait Wand: Sized {
    type Raw;

    /// Human-readable family name, e.g. `"magick wand"`
    const KIND: &'static str;

    /// Take ownership of a wand pointer, returning `None` for null.
    ///
    /// # Safety
    /// `raw` must be null or a live wand of the right family that no other
    /// owner will destroy.
    unsafe fn from_raw(raw: *mut Self::Raw) -> Option<Self>;

    fn as_ptr(&self) -> *mut Self::Raw;

    /// Read the wand's current exception.  The exception slot is left as-is.
    fn exception(&self) -> Error;

    /// Same as [`exception`](Self::exception), but never yields an empty
    /// message
    fn fail(&self, native: &str) -> Error { self.exception().or_failed(native) }
}

macro_rules! wand {
    (
        $(#[$meta:meta])*
        $name:ident($raw:ty, $kind:literal) {
            new: $new:ident,
            clone: $clone:ident,
            destroy: $destroy:ident,
            exception: $exception:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        pub struct $name(NonNull<$raw>);

        impl Wand for $name {
            type Raw = $raw;

            const KIND: &'static str = $kind;

            unsafe fn from_raw(raw: *mut $raw) -> Option<Self> {
                let ptr = NonNull::new(raw)?;
                trace!(kind = $kind, ?ptr, "Acquired wand");
                Some(Self(ptr))
            }

            #[inline]
            fn as_ptr(&self) -> *mut $raw { self.0.as_ptr() }

            fn exception(&self) -> Error {
                let mut severity: ExceptionType = ExceptionType_UndefinedException;
                unsafe {
                    let description = $exception(self.0.as_ptr(), &raw mut severity);
                    Error::from_raw(severity, description)
                }
            }
        }

        impl $name {
            #[allow(clippy::new_ret_no_self)]
            pub fn new() -> Option<Self> {
                crate::genesis();
                unsafe { Self::from_raw($new()) }
            }

            pub fn try_clone(&self) -> Option<Self> {
                unsafe { Self::from_raw($clone(self.0.as_ptr())) }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} ({:p})", $kind, self.0)
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                trace!(kind = $kind, ptr = ?self.0, "Destroying wand");
                unsafe {
                    $destroy(self.0.as_ptr());
                }
            }
        }
    };
}

wand! {
    /// An owned `DrawingWand`, destroyed on drop
    DrawingHandle(DrawingWand, "drawing wand") {
        new: NewDrawingWand,
        clone: CloneDrawingWand,
        destroy: DestroyDrawingWand,
        exception: DrawGetException,
    }
}

wand! {
    /// An owned `MagickWand`, destroyed on drop
    MagickHandle(MagickWand, "magick wand") {
        new: NewMagickWand,
        clone: CloneMagickWand,
        destroy: DestroyMagickWand,
        exception: MagickGetException,
    }
}

wand! {
    /// An owned `PixelWand`, destroyed on drop
    PixelHandle(PixelWand, "pixel wand") {
        new: NewPixelWand,
        clone: ClonePixelWand,
        destroy: DestroyPixelWand,
        exception: PixelGetException,
    }
}

/// A NUL-terminated string allocated by the library
#[repr(transparent)]
pub struct MagickString(NonNull<c_char>);

impl MagickString {
    /// # Safety
    /// `raw` must be null or a string the caller is responsible for
    /// relinquishing.
    pub unsafe fn from_raw(raw: *mut c_char) -> Option<Self> { NonNull::new(raw).map(Self) }

    #[inline]
    #[must_use]
    pub fn as_c_str(&self) -> &CStr { unsafe { CStr::from_ptr(self.0.as_ptr()) } }

    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> &[u8] { self.as_c_str().to_bytes() }

    #[must_use]
    pub fn to_string_lossy(&self) -> String { self.as_c_str().to_string_lossy().into_owned() }
}

impl fmt::Debug for MagickString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.as_c_str().fmt(f) }
}

impl Drop for MagickString {
    fn drop(&mut self) {
        unsafe {
            MagickRelinquishMemory(self.0.as_ptr().cast());
        }
    }
}

/// A counted array allocated by the library.  Only the array itself is
/// released on drop, never the elements.
pub struct MagickBuffer<T> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T> MagickBuffer<T> {
    /// # Safety
    /// `raw` must be null or point to `len` initialized elements that the
    /// caller is responsible for relinquishing.
    pub unsafe fn from_raw(raw: *mut T, len: usize) -> Option<Self> {
        NonNull::new(raw).map(|ptr| Self { ptr, len })
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] { unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) } }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize { self.len }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }
}

impl<T: fmt::Debug> fmt::Debug for MagickBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Drop for MagickBuffer<T> {
    fn drop(&mut self) {
        unsafe {
            MagickRelinquishMemory(self.ptr.as_ptr().cast());
        }
    }
}

/// A counted array of library-allocated strings, as returned by the
/// `*GetOptions`/`*Query*` families.  Every element and the array itself are
/// released on drop.
pub struct MagickStringList(MagickBuffer<*mut c_char>);

impl MagickStringList {
    /// # Safety
    /// `raw` must be null or point to `len` strings, all owned by the caller.
    pub unsafe fn from_raw(raw: *mut *mut c_char, len: usize) -> Option<Self> {
        unsafe { MagickBuffer::from_raw(raw, len) }.map(Self)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CStr> {
        self.0
            .as_slice()
            .iter()
            .filter(|p| !p.is_null())
            .map(|&p| unsafe { CStr::from_ptr(p) })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl fmt::Debug for MagickStringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for MagickStringList {
    fn drop(&mut self) {
        for &p in self.0.as_slice() {
            if !p.is_null() {
                unsafe {
                    MagickRelinquishMemory(p.cast());
                }
            }
        }
    }
}
