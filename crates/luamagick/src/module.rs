//! The table returned to Lua when the library is opened

use std::ffi::{CStr, c_char};

use magick_sys::{DrawingHandle, MagickHandle, PixelHandle, Wand};

use crate::{
    marshal::{Marshal, Outcome, Text, string, strings},
    prelude::*,
    surface::Surface,
};

fn constructor<H: Wand + 'static>(
    lua: &Lua,
    module: &LuaTable,
    name: &str,
    new: fn() -> Option<H>,
) -> LuaResult<()> {
    let f = lua.create_function(move |lua, ()| {
        let handle = new()
            .ok_or_else(|| LuaError::runtime(format!("failed to allocate a {}", H::KIND)))?;
        lua.create_any_userdata(handle)
    })?;

    module.set(name, f)
}

/// Copy a string the library owns and must not be released
fn borrowed(lua: &Lua, raw: *const c_char) -> LuaResult<Option<LuaString>> {
    if raw.is_null() {
        return Ok(None);
    }

    lua.create_string(unsafe { CStr::from_ptr(raw) }.to_bytes())
        .map(Some)
}

fn helpers(lua: &Lua, module: &LuaTable) -> LuaResult<()> {
    module.set(
        "version",
        lua.create_function(|lua, ()| {
            let mut version = 0_usize;
            let name = borrowed(lua, unsafe { magick_sys::MagickGetVersion(&raw mut version) })?;
            Ok((name, version))
        })?,
    )?;

    module.set(
        "package_name",
        lua.create_function(|lua, ()| borrowed(lua, unsafe { magick_sys::MagickGetPackageName() }))?,
    )?;

    module.set(
        "copyright",
        lua.create_function(|lua, ()| borrowed(lua, unsafe { magick_sys::MagickGetCopyright() }))?,
    )?;

    module.set(
        "release_date",
        lua.create_function(|lua, ()| borrowed(lua, unsafe { magick_sys::MagickGetReleaseDate() }))?,
    )?;

    module.set(
        "quantum_depth",
        lua.create_function(|lua, ()| {
            let mut depth = 0_usize;
            let name =
                borrowed(lua, unsafe { magick_sys::MagickGetQuantumDepth(&raw mut depth) })?;
            Ok((name, depth))
        })?,
    )?;

    module.set(
        "quantum_range",
        lua.create_function(|lua, ()| {
            let mut range = 0_usize;
            let name =
                borrowed(lua, unsafe { magick_sys::MagickGetQuantumRange(&raw mut range) })?;
            Ok((name, range))
        })?,
    )?;

    module.set(
        "query_formats",
        lua.create_function(|lua, pattern: Text| {
            let mut len = 0;
            let raw = unsafe { magick_sys::MagickQueryFormats(pattern.as_ptr(), &raw mut len) };
            strings(lua, raw, len)
        })?,
    )?;

    module.set(
        "query_fonts",
        lua.create_function(|lua, pattern: Text| {
            let mut len = 0;
            let raw = unsafe { magick_sys::MagickQueryFonts(pattern.as_ptr(), &raw mut len) };
            strings(lua, raw, len)
        })?,
    )?;

    module.set(
        "query_configure_option",
        lua.create_function(|lua, option: Text| {
            string(lua, unsafe { magick_sys::MagickQueryConfigureOption(option.as_ptr()) })
        })?,
    )?;

    module.set(
        "get_resource_limit",
        lua.create_function(|_, resource: f64| {
            Ok(unsafe { magick_sys::MagickGetResourceLimit(resource.marshal()) })
        })?,
    )?;

    module.set(
        "set_resource_limit",
        lua.create_function(|_, (resource, limit): (f64, f64)| {
            let ret =
                unsafe { magick_sys::MagickSetResourceLimit(resource.marshal(), limit.marshal()) };

            Ok(if crate::marshal::flag(ret) {
                Outcome::Done(true)
            } else {
                Outcome::Failed(magick_sys::Error::new(
                    magick_sys::ExceptionType_ResourceLimitError,
                    "MagickSetResourceLimit failed",
                ))
            })
        })?,
    )?;

    Ok(())
}

/// Build a module table for `surface`.  The handle types must already be
/// registered on `lua`.
pub(crate) fn create(lua: &Lua, surface: Surface) -> LuaResult<LuaTable> {
    let module = lua.create_table()?;

    constructor(lua, &module, "new_drawing_wand", DrawingHandle::new)?;
    constructor(lua, &module, "new_magick_wand", MagickHandle::new)?;
    constructor(lua, &module, "new_pixel_wand", PixelHandle::new)?;

    if surface.has_helpers() {
        helpers(lua, &module)?;
    }

    if surface.has_constants() {
        crate::constants::install(lua, &module)?;
    }

    module.set("surface", surface.name())?;

    Ok(module)
}
