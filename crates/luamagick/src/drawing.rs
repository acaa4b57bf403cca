//! Methods of drawing wand handles

use magick_sys::{AffineMatrix, DrawingHandle, MagickBuffer, PointInfo, Wand};

use crate::{
    bind::{add_method, bind_methods},
    marshal::{Magick, Outcome, Pixel, Text, points, status},
    prelude::*,
    surface::{Family, Surface},
};

const FAMILY: Family = Family::Drawing;

bind_methods! {
    FAMILY, DrawingHandle;
    void "alpha" => DrawAlpha(x: f64, y: f64, method: f64);
    void "annotation" => DrawAnnotation(x: f64, y: f64, text: Text);
    void "arc" => DrawArc(sx: f64, sy: f64, ex: f64, ey: f64, sd: f64, ed: f64);
    void "circle" => DrawCircle(ox: f64, oy: f64, px: f64, py: f64);
    void "clear" => ClearDrawingWand();
    status "clear_exception" => DrawClearException();
    drawing "clone" => CloneDrawingWand();
    void "color" => DrawColor(x: f64, y: f64, method: f64);
    void "comment" => DrawComment(comment: Text);
    status "composite" => DrawComposite(
        compose: f64,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        image: Magick,
    );
    void "ellipse" => DrawEllipse(ox: f64, oy: f64, rx: f64, ry: f64, start: f64, end: f64);
    void "get_border_color" => DrawGetBorderColor(color: Pixel);
    string "get_clip_path" => DrawGetClipPath();
    value "get_clip_rule" => DrawGetClipRule();
    value "get_clip_units" => DrawGetClipUnits();
    string "get_density" => DrawGetDensity();
    value "get_exception_type" => DrawGetExceptionType();
    void "get_fill_color" => DrawGetFillColor(color: Pixel);
    value "get_fill_opacity" => DrawGetFillOpacity();
    value "get_fill_rule" => DrawGetFillRule();
    string "get_font" => DrawGetFont();
    string "get_font_family" => DrawGetFontFamily();
    value "get_font_size" => DrawGetFontSize();
    value "get_font_stretch" => DrawGetFontStretch();
    value "get_font_style" => DrawGetFontStyle();
    value "get_font_weight" => DrawGetFontWeight();
    value "get_gravity" => DrawGetGravity();
    value "get_opacity" => DrawGetOpacity();
    status "get_stroke_antialias" => DrawGetStrokeAntialias();
    void "get_stroke_color" => DrawGetStrokeColor(color: Pixel);
    value "get_stroke_dash_offset" => DrawGetStrokeDashOffset();
    value "get_stroke_line_cap" => DrawGetStrokeLineCap();
    value "get_stroke_line_join" => DrawGetStrokeLineJoin();
    value "get_stroke_miter_limit" => DrawGetStrokeMiterLimit();
    value "get_stroke_opacity" => DrawGetStrokeOpacity();
    value "get_stroke_width" => DrawGetStrokeWidth();
    value "get_text_alignment" => DrawGetTextAlignment();
    status "get_text_antialias" => DrawGetTextAntialias();
    value "get_text_decoration" => DrawGetTextDecoration();
    value "get_text_direction" => DrawGetTextDirection();
    string "get_text_encoding" => DrawGetTextEncoding();
    value "get_text_interline_spacing" => DrawGetTextInterlineSpacing();
    value "get_text_interword_spacing" => DrawGetTextInterwordSpacing();
    value "get_text_kerning" => DrawGetTextKerning();
    void "get_text_under_color" => DrawGetTextUnderColor(color: Pixel);
    string "get_vector_graphics" => DrawGetVectorGraphics();
    void "line" => DrawLine(sx: f64, sy: f64, ex: f64, ey: f64);
    void "path_close" => DrawPathClose();
    void "path_curve_to_absolute" => DrawPathCurveToAbsolute(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    );
    void "path_curve_to_quadratic_bezier_absolute" => DrawPathCurveToQuadraticBezierAbsolute(
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    );
    void "path_curve_to_quadratic_bezier_relative" => DrawPathCurveToQuadraticBezierRelative(
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    );
    void "path_curve_to_quadratic_bezier_smooth_absolute" =>
        DrawPathCurveToQuadraticBezierSmoothAbsolute(x: f64, y: f64);
    void "path_curve_to_quadratic_bezier_smooth_relative" =>
        DrawPathCurveToQuadraticBezierSmoothRelative(x: f64, y: f64);
    void "path_curve_to_relative" => DrawPathCurveToRelative(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    );
    void "path_curve_to_smooth_absolute" => DrawPathCurveToSmoothAbsolute(
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    );
    void "path_curve_to_smooth_relative" => DrawPathCurveToSmoothRelative(
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    );
    void "path_elliptic_arc_absolute" => DrawPathEllipticArcAbsolute(
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    );
    void "path_elliptic_arc_relative" => DrawPathEllipticArcRelative(
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    );
    void "path_finish" => DrawPathFinish();
    void "path_line_to_absolute" => DrawPathLineToAbsolute(x: f64, y: f64);
    void "path_line_to_horizontal_absolute" => DrawPathLineToHorizontalAbsolute(x: f64);
    void "path_line_to_horizontal_relative" => DrawPathLineToHorizontalRelative(x: f64);
    void "path_line_to_relative" => DrawPathLineToRelative(x: f64, y: f64);
    void "path_line_to_vertical_absolute" => DrawPathLineToVerticalAbsolute(y: f64);
    void "path_line_to_vertical_relative" => DrawPathLineToVerticalRelative(y: f64);
    void "path_move_to_absolute" => DrawPathMoveToAbsolute(x: f64, y: f64);
    void "path_move_to_relative" => DrawPathMoveToRelative(x: f64, y: f64);
    void "path_start" => DrawPathStart();
    void "point" => DrawPoint(x: f64, y: f64);
    void "pop_clip_path" => DrawPopClipPath();
    void "pop_defs" => DrawPopDefs();
    status "pop_graphic_context" => PopDrawingWand();
    status "pop_pattern" => DrawPopPattern();
    void "push_clip_path" => DrawPushClipPath(clip_mask_id: Text);
    void "push_defs" => DrawPushDefs();
    status "push_graphic_context" => PushDrawingWand();
    status "push_pattern" => DrawPushPattern(
        pattern_id: Text,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    );
    void "rectangle" => DrawRectangle(x1: f64, y1: f64, x2: f64, y2: f64);
    void "reset_vector_graphics" => DrawResetVectorGraphics();
    void "rotate" => DrawRotate(degrees: f64);
    void "round_rectangle" => DrawRoundRectangle(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        rx: f64,
        ry: f64,
    );
    void "scale" => DrawScale(x: f64, y: f64);
    void "set_border_color" => DrawSetBorderColor(color: Pixel);
    status "set_clip_path" => DrawSetClipPath(clip_mask: Text);
    void "set_clip_rule" => DrawSetClipRule(rule: f64);
    void "set_clip_units" => DrawSetClipUnits(units: f64);
    status "set_density" => DrawSetDensity(density: Text);
    void "set_fill_color" => DrawSetFillColor(color: Pixel);
    void "set_fill_opacity" => DrawSetFillOpacity(opacity: f64);
    status "set_fill_pattern_url" => DrawSetFillPatternURL(url: Text);
    void "set_fill_rule" => DrawSetFillRule(rule: f64);
    status "set_font" => DrawSetFont(font: Text);
    status "set_font_family" => DrawSetFontFamily(family: Text);
    status "set_font_resolution" => DrawSetFontResolution(x: f64, y: f64);
    void "set_font_size" => DrawSetFontSize(size: f64);
    void "set_font_stretch" => DrawSetFontStretch(stretch: f64);
    void "set_font_style" => DrawSetFontStyle(style: f64);
    void "set_font_weight" => DrawSetFontWeight(weight: f64);
    void "set_gravity" => DrawSetGravity(gravity: f64);
    void "set_opacity" => DrawSetOpacity(opacity: f64);
    void "set_stroke_antialias" => DrawSetStrokeAntialias(antialias: bool);
    void "set_stroke_color" => DrawSetStrokeColor(color: Pixel);
    void "set_stroke_dash_offset" => DrawSetStrokeDashOffset(offset: f64);
    void "set_stroke_line_cap" => DrawSetStrokeLineCap(cap: f64);
    void "set_stroke_line_join" => DrawSetStrokeLineJoin(join: f64);
    void "set_stroke_miter_limit" => DrawSetStrokeMiterLimit(limit: f64);
    void "set_stroke_opacity" => DrawSetStrokeOpacity(opacity: f64);
    status "set_stroke_pattern_url" => DrawSetStrokePatternURL(url: Text);
    void "set_stroke_width" => DrawSetStrokeWidth(width: f64);
    void "set_text_alignment" => DrawSetTextAlignment(alignment: f64);
    void "set_text_antialias" => DrawSetTextAntialias(antialias: bool);
    void "set_text_decoration" => DrawSetTextDecoration(decoration: f64);
    void "set_text_direction" => DrawSetTextDirection(direction: f64);
    void "set_text_encoding" => DrawSetTextEncoding(encoding: Text);
    void "set_text_interline_spacing" => DrawSetTextInterlineSpacing(spacing: f64);
    void "set_text_interword_spacing" => DrawSetTextInterwordSpacing(spacing: f64);
    void "set_text_kerning" => DrawSetTextKerning(kerning: f64);
    void "set_text_under_color" => DrawSetTextUnderColor(color: Pixel);
    status "set_vector_graphics" => DrawSetVectorGraphics(xml: Text);
    void "set_viewbox" => DrawSetViewbox(x1: f64, y1: f64, x2: f64, y2: f64);
    void "skew_x" => DrawSkewX(degrees: f64);
    void "skew_y" => DrawSkewY(degrees: f64);
    void "translate" => DrawTranslate(x: f64, y: f64);
}

pub(crate) const HANDWRITTEN: &[&str] = &[
    "affine",
    "bezier",
    "get_font_resolution",
    "get_stroke_dash_array",
    "polygon",
    "polyline",
    "set_stroke_dash_array",
];

type PathFn = unsafe extern "C" fn(*mut magick_sys::DrawingWand, usize, *const PointInfo);

fn path(this: &DrawingHandle, coords: &[f64], f: PathFn) -> LuaResult<()> {
    let pts = points(coords)?;
    unsafe { f(this.as_ptr(), pts.len(), pts.as_ptr()) };
    Ok(())
}

pub(crate) fn register(lua: &Lua, surface: Surface) -> LuaResult<()> {
    lua.register_userdata_type::<DrawingHandle>(|reg| {
        register_generated(reg, surface);

        add_method!(
            reg,
            surface,
            FAMILY,
            "affine",
            |_, this, (sx, rx, ry, sy, tx, ty): (f64, f64, f64, f64, f64, f64)| {
                let matrix = AffineMatrix {
                    sx,
                    rx,
                    ry,
                    sy,
                    tx,
                    ty,
                };
                unsafe { magick_sys::DrawAffine(this.as_ptr(), &raw const matrix) };
                Ok(())
            }
        );

        add_method!(reg, surface, FAMILY, "bezier", |_, this, coords: Vec<f64>| {
            path(this, &coords, magick_sys::DrawBezier)
        });

        add_method!(reg, surface, FAMILY, "polygon", |_, this, coords: Vec<f64>| {
            path(this, &coords, magick_sys::DrawPolygon)
        });

        add_method!(reg, surface, FAMILY, "polyline", |_, this, coords: Vec<f64>| {
            path(this, &coords, magick_sys::DrawPolyline)
        });

        add_method!(reg, surface, FAMILY, "get_font_resolution", |_, this, ()| {
            let (mut x, mut y) = (0.0, 0.0);
            let ret = unsafe {
                magick_sys::DrawGetFontResolution(this.as_ptr(), &raw mut x, &raw mut y)
            };
            Ok(Outcome::check(this, ret, "DrawGetFontResolution", (x, y)))
        });

        add_method!(reg, surface, FAMILY, "get_stroke_dash_array", |_, this, ()| {
            let mut len = 0;
            let raw = unsafe { magick_sys::DrawGetStrokeDashArray(this.as_ptr(), &raw mut len) };
            let dashes = unsafe { MagickBuffer::from_raw(raw, len) };
            Ok(dashes.map_or_else(Vec::new, |d| d.as_slice().to_vec()))
        });

        add_method!(
            reg,
            surface,
            FAMILY,
            "set_stroke_dash_array",
            |_, this, dashes: Vec<f64>| {
                let ret = unsafe {
                    magick_sys::DrawSetStrokeDashArray(this.as_ptr(), dashes.len(), dashes.as_ptr())
                };
                Ok(status(this, ret, "DrawSetStrokeDashArray"))
            }
        );

        crate::add_tostring(reg);
    })
}

#[cfg(test)]
mod test {
    use crate::{surface::Surface, test::state};

    #[test]
    fn test_draw_onto_image() {
        state(Surface::Lite)
            .load(
                r#"
                local white = magick.new_pixel_wand()
                assert(white:set_color("white"))
                local w = magick.new_magick_wand()
                assert(w:new_image(20, 20, white))

                local blue = magick.new_pixel_wand()
                assert(blue:set_color("blue"))

                local d = magick.new_drawing_wand()
                assert(d:push_graphic_context())
                d:set_fill_color(blue)
                d:rectangle(0, 0, 9, 9)
                assert(d:pop_graphic_context())
                assert(w:draw_image(d))

                local out = magick.new_pixel_wand()
                assert(w:get_image_pixel_color(5, 5, out))
                assert(out:get_blue() > 0.99 and out:get_red() < 0.01)
                assert(w:get_image_pixel_color(15, 15, out))
                assert(out:get_red() > 0.99)
                "#,
            )
            .exec()
            .unwrap();
    }

    #[test]
    fn test_point_arrays() {
        state(Surface::Full)
            .load(
                r#"
                local d = magick.new_drawing_wand()
                d:polygon({0, 0, 10, 0, 5, 5})
                d:polyline({0, 0, 10, 10})
                d:bezier({0, 0, 5, 10, 10, 0})
                assert(not pcall(d.polygon, d, {0, 0, 10}))
                assert(not pcall(d.polyline, d, {0, "y"}))

                local mvg = d:get_vector_graphics()
                assert(mvg:find("polygon"))
                assert(mvg:find("polyline"))
                "#,
            )
            .exec()
            .unwrap();
    }

    #[test]
    fn test_dash_array_and_resolution() {
        state(Surface::Compact)
            .load(
                r#"
                local d = magick.new_drawing_wand()
                assert(#d:get_stroke_dash_array() == 0)
                assert(d:set_stroke_dash_array({4, 2, 1}))
                local dashes = d:get_stroke_dash_array()
                assert(#dashes == 3 and dashes[1] == 4 and dashes[3] == 1)

                assert(d:set_font_resolution(72, 144))
                local x, y = d:get_font_resolution()
                assert(x == 72 and y == 144)

                d:affine(1, 0, 0, 1, 5, 5)
                assert(d:get_vector_graphics():find("affine"))
                "#,
            )
            .exec()
            .unwrap();
    }
}
