//! Methods of pixel wand handles

use magick_sys::{PixelHandle, Wand};

use crate::{
    bind::{add_method, bind_methods},
    marshal::{Pixel, Text},
    prelude::*,
    surface::{Family, Surface},
};

const FAMILY: Family = Family::Pixel;

bind_methods! {
    FAMILY, PixelHandle;
    void "clear" => ClearPixelWand();
    status "clear_exception" => PixelClearException();
    pixel "clone" => ClonePixelWand();
    value "get_alpha" => PixelGetAlpha();
    value "get_alpha_quantum" => PixelGetAlphaQuantum();
    value "get_black" => PixelGetBlack();
    value "get_black_quantum" => PixelGetBlackQuantum();
    value "get_blue" => PixelGetBlue();
    value "get_blue_quantum" => PixelGetBlueQuantum();
    string "get_color_as_normalized_string" => PixelGetColorAsNormalizedString();
    string "get_color_as_string" => PixelGetColorAsString();
    value "get_color_count" => PixelGetColorCount();
    value "get_cyan" => PixelGetCyan();
    value "get_cyan_quantum" => PixelGetCyanQuantum();
    value "get_exception_type" => PixelGetExceptionType();
    value "get_fuzz" => PixelGetFuzz();
    value "get_green" => PixelGetGreen();
    value "get_green_quantum" => PixelGetGreenQuantum();
    value "get_index" => PixelGetIndex();
    value "get_magenta" => PixelGetMagenta();
    value "get_magenta_quantum" => PixelGetMagentaQuantum();
    value "get_red" => PixelGetRed();
    value "get_red_quantum" => PixelGetRedQuantum();
    value "get_yellow" => PixelGetYellow();
    value "get_yellow_quantum" => PixelGetYellowQuantum();
    status "is_similar" => IsPixelWandSimilar(other: Pixel, fuzz: f64);
    void "set_alpha" => PixelSetAlpha(alpha: f64);
    void "set_alpha_quantum" => PixelSetAlphaQuantum(alpha: f64);
    void "set_black" => PixelSetBlack(black: f64);
    void "set_black_quantum" => PixelSetBlackQuantum(black: f64);
    void "set_blue" => PixelSetBlue(blue: f64);
    void "set_blue_quantum" => PixelSetBlueQuantum(blue: f64);
    status "set_color" => PixelSetColor(color: Text);
    void "set_color_count" => PixelSetColorCount(count: f64);
    void "set_color_from_wand" => PixelSetColorFromWand(color: Pixel);
    void "set_cyan" => PixelSetCyan(cyan: f64);
    void "set_cyan_quantum" => PixelSetCyanQuantum(cyan: f64);
    void "set_fuzz" => PixelSetFuzz(fuzz: f64);
    void "set_green" => PixelSetGreen(green: f64);
    void "set_green_quantum" => PixelSetGreenQuantum(green: f64);
    void "set_hsl" => PixelSetHSL(hue: f64, saturation: f64, lightness: f64);
    void "set_index" => PixelSetIndex(index: f64);
    void "set_magenta" => PixelSetMagenta(magenta: f64);
    void "set_magenta_quantum" => PixelSetMagentaQuantum(magenta: f64);
    void "set_red" => PixelSetRed(red: f64);
    void "set_red_quantum" => PixelSetRedQuantum(red: f64);
    void "set_yellow" => PixelSetYellow(yellow: f64);
    void "set_yellow_quantum" => PixelSetYellowQuantum(yellow: f64);
}

pub(crate) const HANDWRITTEN: &[&str] = &["get_hsl"];

pub(crate) fn register(lua: &Lua, surface: Surface) -> LuaResult<()> {
    lua.register_userdata_type::<PixelHandle>(|reg| {
        register_generated(reg, surface);

        add_method!(reg, surface, FAMILY, "get_hsl", |_, this, ()| {
            let (mut hue, mut saturation, mut lightness) = (0.0, 0.0, 0.0);
            unsafe {
                magick_sys::PixelGetHSL(
                    this.as_ptr(),
                    &raw mut hue,
                    &raw mut saturation,
                    &raw mut lightness,
                );
            }
            Ok((hue, saturation, lightness))
        });

        crate::add_tostring(reg);
    })
}

#[cfg(test)]
mod test {
    use crate::{surface::Surface, test::state};

    #[test]
    fn test_color_channels() {
        state(Surface::Full)
            .load(
                r#"
                local p = magick.new_pixel_wand()
                assert(p:set_color("#ff0000"))
                assert(p:get_red() > 0.99 and p:get_green() == 0)
                assert(p:get_color_as_string():find("255,0,0"))

                p:set_blue(0.5)
                assert(math.abs(p:get_blue() - 0.5) < 1e-6)

                local ok, msg = p:set_color("not a color at all")
                assert(ok == nil and #msg > 0)
                assert(p:clear_exception())
                "#,
            )
            .exec()
            .unwrap();
    }

    #[test]
    fn test_hsl_and_similarity() {
        state(Surface::Compact)
            .load(
                r#"
                local p = magick.new_pixel_wand()
                p:set_hsl(0, 1, 0.5)
                local h, s, l = p:get_hsl()
                assert(math.abs(h) < 1e-6 and math.abs(s - 1) < 1e-6 and math.abs(l - 0.5) < 1e-6)
                assert(p:get_red() > 0.99)

                local q = p:clone()
                assert(p:is_similar(q, 0))
                q:set_green(1)
                local same, why = p:is_similar(q, 0)
                assert(same == nil and #why > 0)
                local _, range = magick.quantum_range()
                assert(p:is_similar(q, 2 * range))
                "#,
            )
            .exec()
            .unwrap();
    }
}
