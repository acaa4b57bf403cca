/// Declare a family's table of one-call methods.
///
/// Each row reads `kind "lua_name" => NativeFunction(arg: Type, ...);` where
/// the receiver is implied as the first native argument.  `kind` selects how
/// the native return value reaches Lua:
///
/// - `void`: nothing is returned
/// - `status`: `true`, or `nil, message` from the receiver's exception slot
/// - `value`: the native number as-is
/// - `string`: a copied and released string, or `nil`
/// - `drawing`, `magick`, `pixel`: a new owned handle, or `nil, message`
///
/// The expansion defines `GENERATED`, the list of names, and
/// `register_generated`, which installs the rows a surface includes.
macro_rules! bind_methods {
    (@native $this:ident, $native:ident, $($arg:ident),*) => {
        unsafe {
            ::magick_sys::$native(
                ::magick_sys::Wand::as_ptr($this),
                $($crate::marshal::Marshal::marshal(&$arg)),*
            )
        }
    };

    (@call void, $lua:ident, $this:ident, $native:ident, $($arg:ident),*) => {{
        let _ = $lua;
        $crate::bind::bind_methods!(@native $this, $native, $($arg),*);
        Ok(())
    }};

    (@call status, $lua:ident, $this:ident, $native:ident, $($arg:ident),*) => {{
        let _ = $lua;
        let ret = $crate::bind::bind_methods!(@native $this, $native, $($arg),*);
        Ok($crate::marshal::status($this, ret, stringify!($native)))
    }};

    (@call value, $lua:ident, $this:ident, $native:ident, $($arg:ident),*) => {{
        let _ = $lua;
        Ok($crate::bind::bind_methods!(@native $this, $native, $($arg),*))
    }};

    (@call string, $lua:ident, $this:ident, $native:ident, $($arg:ident),*) => {{
        let ret = $crate::bind::bind_methods!(@native $this, $native, $($arg),*);
        $crate::marshal::string($lua, ret)
    }};

    (@call drawing, $lua:ident, $this:ident, $native:ident, $($arg:ident),*) => {{
        let ret = $crate::bind::bind_methods!(@native $this, $native, $($arg),*);
        $crate::marshal::wrap::<_, ::magick_sys::DrawingHandle>($lua, $this, ret, stringify!($native))
    }};

    (@call magick, $lua:ident, $this:ident, $native:ident, $($arg:ident),*) => {{
        let ret = $crate::bind::bind_methods!(@native $this, $native, $($arg),*);
        $crate::marshal::wrap::<_, ::magick_sys::MagickHandle>($lua, $this, ret, stringify!($native))
    }};

    (@call pixel, $lua:ident, $this:ident, $native:ident, $($arg:ident),*) => {{
        let ret = $crate::bind::bind_methods!(@native $this, $native, $($arg),*);
        $crate::marshal::wrap::<_, ::magick_sys::PixelHandle>($lua, $this, ret, stringify!($native))
    }};

    (
        $family:expr, $handle:ty;
        $($kind:ident $name:literal => $native:ident($($arg:ident: $ty:ty),* $(,)?);)*
    ) => {
        pub(crate) const GENERATED: &[&str] = &[$($name),*];

        pub(crate) fn register_generated(
            reg: &mut ::mlua::UserDataRegistry<$handle>,
            surface: $crate::surface::Surface,
        ) {
            use ::mlua::UserDataMethods as _;

            $(
                if surface.includes($family, $name) {
                    reg.add_method($name, |lua, this, ($($arg,)*): ($($ty,)*)| {
                        $crate::bind::bind_methods!(@call $kind, lua, this, $native, $($arg),*)
                    });
                }
            )*
        }
    };
}

/// Register a hand-written method if the surface includes it
macro_rules! add_method {
    ($reg:expr, $surface:expr, $family:expr, $name:literal, $method:expr $(,)?) => {
        if $surface.includes($family, $name) {
            ::mlua::UserDataMethods::add_method($reg, $name, $method);
        }
    };
}

pub(crate) use add_method;
pub(crate) use bind_methods;
