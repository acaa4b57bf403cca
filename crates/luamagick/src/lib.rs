//! Lua bindings for the ImageMagick 7 MagickWand API.
//!
//! Drawing, image and pixel wands are exposed to Lua as userdata handles
//! whose methods each forward to exactly one MagickWand function.  A call
//! that fails natively returns `nil` and the message left in the receiver's
//! exception slot; an argument of the wrong type raises a Lua error before
//! anything native runs.
//!
//! The binding comes in three [`Surface`]s of decreasing coverage.  Use
//! [`open`] to load one into an existing [`mlua::Lua`] state, or build with
//! the `module` feature to get a `require`-able shared library.

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod bind;
mod constants;
mod drawing;
mod log;
mod magick;
mod marshal;
mod module;
mod pixel;
mod surface;

pub use log::LOG_ENV;
pub use magick_sys::{DrawingHandle, MagickHandle, PixelHandle};
pub use surface::{Family, Surface};

use crate::prelude::*;

mod prelude {
    #![expect(unused_imports, reason = "Some exports may not yet be used")]

    pub use std::fmt;

    pub use mlua::{
        AnyUserData as LuaAnyUserData, Error as LuaError, FromLua, IntoLua, IntoLuaMulti, Lua,
        MetaMethod, MultiValue as LuaMultiValue, Result as LuaResult, String as LuaString,
        Table as LuaTable, UserDataMethods, UserDataRef, UserDataRegistry, Value,
        Variadic as LuaVariadic,
    };
    pub use tracing::{debug, error, trace, warn};
}

/// Error opening the library in a Lua state
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OpenError {
    /// The state already has handle types registered for another surface
    #[error("this Lua state already loaded the {bound} luamagick surface, cannot load {requested}")]
    SurfaceMismatch {
        /// The surface registered first
        bound: Surface,
        /// The surface asked for
        requested: Surface,
    },
}

/// Names of every method a handle of `family` can carry under the full
/// surface
pub fn method_names(family: Family) -> impl Iterator<Item = &'static str> {
    let (generated, handwritten) = match family {
        Family::Drawing => (drawing::GENERATED, drawing::HANDWRITTEN),
        Family::Magick => (magick::GENERATED, magick::HANDWRITTEN),
        Family::Pixel => (pixel::GENERATED, pixel::HANDWRITTEN),
    };

    generated.iter().chain(handwritten).copied()
}

/// Names of the enum tables exported by [`Surface::Full`]
#[must_use]
pub fn constant_tables() -> &'static [&'static str] { constants::ENUMS }

fn add_tostring<H: magick_sys::Wand + fmt::Debug + 'static>(reg: &mut UserDataRegistry<H>) {
    reg.add_meta_method(MetaMethod::ToString, |_, this, ()| Ok(format!("{this:?}")));
}

/// Load `surface` into `lua` and return its module table.
///
/// The first call registers the handle types for the state.  Later calls
/// with the same surface return a fresh module table; asking for a different
/// surface fails with [`OpenError::SurfaceMismatch`].
pub fn open(lua: &Lua, surface: Surface) -> LuaResult<LuaTable> {
    log::init();
    magick_sys::genesis();

    let bound = lua.app_data_ref::<Surface>().map(|s| *s);

    match bound {
        Some(bound) if bound != surface => {
            return Err(LuaError::external(OpenError::SurfaceMismatch {
                bound,
                requested: surface,
            }));
        },
        Some(_) => trace!(%surface, "Handle types already registered"),
        None => {
            drawing::register(lua, surface)?;
            magick::register(lua, surface)?;
            pixel::register(lua, surface)?;
            lua.set_app_data(surface);
            debug!(%surface, "Registered handle types");
        },
    }

    module::create(lua, surface)
}

#[cfg(feature = "module")]
#[mlua::lua_module]
fn luamagick(lua: &Lua) -> LuaResult<LuaTable> { open(lua, Surface::Full) }

#[cfg(feature = "module")]
#[mlua::lua_module]
fn luamagick_compact(lua: &Lua) -> LuaResult<LuaTable> { open(lua, Surface::Compact) }

#[cfg(feature = "module")]
#[mlua::lua_module]
fn luamagick_lite(lua: &Lua) -> LuaResult<LuaTable> { open(lua, Surface::Lite) }

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// A fresh state with `surface` bound to the global `magick`
    pub fn state(surface: Surface) -> Lua {
        let lua = Lua::new();
        let module = open(&lua, surface).unwrap();
        lua.globals().set("magick", module).unwrap();
        lua
    }

    fn kind_of(lua: &Lua, family: Family, name: &str) -> String {
        let ctor = match family {
            Family::Drawing => "new_drawing_wand",
            Family::Magick => "new_magick_wand",
            Family::Pixel => "new_pixel_wand",
        };

        lua.load(format!("return type(magick.{ctor}()[{name:?}])"))
            .eval()
            .unwrap()
    }

    #[test]
    fn test_registration_follows_surface() {
        for surface in Surface::ALL {
            let lua = state(surface);

            for family in Family::ALL {
                for name in method_names(family) {
                    let expected = if surface.includes(family, name) {
                        "function"
                    } else {
                        "nil"
                    };

                    assert_eq!(
                        kind_of(&lua, family, name),
                        expected,
                        "{family:?}.{name} under {surface}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_module_contents() {
        for surface in Surface::ALL {
            let lua = state(surface);
            let module: LuaTable = lua.globals().get("magick").unwrap();

            for ctor in ["new_drawing_wand", "new_magick_wand", "new_pixel_wand"] {
                assert!(module.contains_key(ctor).unwrap());
            }

            assert_eq!(
                module.contains_key("version").unwrap(),
                surface.has_helpers()
            );

            for name in constant_tables() {
                assert_eq!(module.contains_key(*name).unwrap(), surface.has_constants());
            }

            assert_eq!(module.get::<String>("surface").unwrap(), surface.name());
        }
    }

    #[test]
    fn test_one_surface_per_state() {
        let lua = Lua::new();
        open(&lua, Surface::Compact).unwrap();
        open(&lua, Surface::Compact).unwrap();

        let err = open(&lua, Surface::Full).unwrap_err();
        assert!(err.to_string().contains("cannot load full"), "{err}");
    }

    #[test]
    fn test_handles_print_their_kind() {
        let lua = state(Surface::Lite);

        lua.load(
            r#"
            assert(tostring(magick.new_drawing_wand()):find("^drawing wand %(0x"))
            assert(tostring(magick.new_magick_wand()):find("^magick wand %(0x"))
            assert(tostring(magick.new_pixel_wand()):find("^pixel wand %(0x"))
            "#,
        )
        .exec()
        .unwrap();
    }

    #[test]
    fn test_helpers() {
        let lua = state(Surface::Full);

        lua.load(
            r#"
            local name, number = magick.version()
            assert(name:find("ImageMagick"), name)
            assert(math.type(number) == "integer")

            local _, depth = magick.quantum_depth()
            assert(depth >= 8)

            local formats = magick.query_formats("*")
            assert(#formats > 0)

            local limit = magick.get_resource_limit(magick.ResourceType.ThreadResource)
            assert(limit >= 1)
            assert(magick.set_resource_limit(magick.ResourceType.ThreadResource, limit))
            "#,
        )
        .exec()
        .unwrap();
    }
}
