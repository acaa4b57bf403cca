//! Methods of magick (image) wand handles

use std::ffi::{c_char, c_void};

use magick_sys::{
    MagickBuffer, MagickHandle, MagickWand, PixelHandle, PixelWand, StorageType_DoublePixel,
    Wand,
};

use crate::{
    bind::{add_method, bind_methods},
    marshal::{Drawing, Magick, Marshal, Outcome, Pixel, Text, status, strings, wrap},
    prelude::*,
    surface::{Family, Surface},
};

const FAMILY: Family = Family::Magick;

bind_methods! {
    FAMILY, MagickHandle;
    status "adaptive_blur_image" => MagickAdaptiveBlurImage(radius: f64, sigma: f64);
    status "adaptive_resize_image" => MagickAdaptiveResizeImage(columns: f64, rows: f64);
    status "adaptive_sharpen_image" => MagickAdaptiveSharpenImage(radius: f64, sigma: f64);
    status "adaptive_threshold_image" => MagickAdaptiveThresholdImage(
        width: f64,
        height: f64,
        bias: f64,
    );
    status "add_image" => MagickAddImage(other: Magick);
    status "add_noise_image" => MagickAddNoiseImage(noise: f64, attenuate: f64);
    status "affine_transform_image" => MagickAffineTransformImage(drawing: Drawing);
    status "animate_images" => MagickAnimateImages(server_name: Text);
    status "annotate_image" => MagickAnnotateImage(
        drawing: Drawing,
        x: f64,
        y: f64,
        angle: f64,
        text: Text,
    );
    magick "append_images" => MagickAppendImages(stack: bool);
    status "auto_gamma_image" => MagickAutoGammaImage();
    status "auto_level_image" => MagickAutoLevelImage();
    status "auto_orient_image" => MagickAutoOrientImage();
    status "auto_threshold_image" => MagickAutoThresholdImage(method: f64);
    status "black_threshold_image" => MagickBlackThresholdImage(threshold: Pixel);
    status "blue_shift_image" => MagickBlueShiftImage(factor: f64);
    status "blur_image" => MagickBlurImage(radius: f64, sigma: f64);
    status "border_image" => MagickBorderImage(
        color: Pixel,
        width: f64,
        height: f64,
        compose: f64,
    );
    status "brightness_contrast_image" => MagickBrightnessContrastImage(
        brightness: f64,
        contrast: f64,
    );
    status "canny_edge_image" => MagickCannyEdgeImage(
        radius: f64,
        sigma: f64,
        lower_percent: f64,
        upper_percent: f64,
    );
    magick "channel_fx_image" => MagickChannelFxImage(expression: Text);
    status "charcoal_image" => MagickCharcoalImage(radius: f64, sigma: f64);
    status "chop_image" => MagickChopImage(width: f64, height: f64, x: f64, y: f64);
    status "clahe_image" => MagickCLAHEImage(
        width: f64,
        height: f64,
        number_bins: f64,
        clip_limit: f64,
    );
    status "clamp_image" => MagickClampImage();
    void "clear" => ClearMagickWand();
    status "clear_exception" => MagickClearException();
    status "clip_image" => MagickClipImage();
    status "clip_image_path" => MagickClipImagePath(pathname: Text, inside: bool);
    magick "clone" => CloneMagickWand();
    status "clut_image" => MagickClutImage(clut: Magick, method: f64);
    magick "coalesce_images" => MagickCoalesceImages();
    status "color_decision_list_image" => MagickColorDecisionListImage(collection: Text);
    status "colorize_image" => MagickColorizeImage(colorize: Pixel, blend: Pixel);
    magick "combine_images" => MagickCombineImages(colorspace: f64);
    status "comment_image" => MagickCommentImage(comment: Text);
    magick "compare_images_layers" => MagickCompareImagesLayers(method: f64);
    magick "complex_images" => MagickComplexImages(op: f64);
    status "composite_image" => MagickCompositeImage(
        source: Magick,
        compose: f64,
        clip_to_self: bool,
        x: f64,
        y: f64,
    );
    status "composite_image_gravity" => MagickCompositeImageGravity(
        source: Magick,
        compose: f64,
        gravity: f64,
    );
    status "composite_layers" => MagickCompositeLayers(
        source: Magick,
        compose: f64,
        x: f64,
        y: f64,
    );
    status "contrast_image" => MagickContrastImage(sharpen: bool);
    status "contrast_stretch_image" => MagickContrastStretchImage(black: f64, white: f64);
    status "crop_image" => MagickCropImage(width: f64, height: f64, x: f64, y: f64);
    status "cycle_colormap_image" => MagickCycleColormapImage(displace: f64);
    status "decipher_image" => MagickDecipherImage(passphrase: Text);
    magick "deconstruct_images" => MagickDeconstructImages();
    status "delete_image_artifact" => MagickDeleteImageArtifact(artifact: Text);
    status "delete_image_property" => MagickDeleteImageProperty(property: Text);
    status "delete_option" => MagickDeleteOption(option: Text);
    status "deskew_image" => MagickDeskewImage(threshold: f64);
    status "despeckle_image" => MagickDespeckleImage();
    status "display_image" => MagickDisplayImage(server_name: Text);
    status "display_images" => MagickDisplayImages(server_name: Text);
    status "draw_image" => MagickDrawImage(drawing: Drawing);
    status "edge_image" => MagickEdgeImage(radius: f64);
    status "emboss_image" => MagickEmbossImage(radius: f64, sigma: f64);
    status "encipher_image" => MagickEncipherImage(passphrase: Text);
    status "enhance_image" => MagickEnhanceImage();
    status "equalize_image" => MagickEqualizeImage();
    status "evaluate_image" => MagickEvaluateImage(op: f64, value: f64);
    magick "evaluate_images" => MagickEvaluateImages(op: f64);
    status "extent_image" => MagickExtentImage(width: f64, height: f64, x: f64, y: f64);
    status "flip_image" => MagickFlipImage();
    status "floodfill_paint_image" => MagickFloodfillPaintImage(
        fill: Pixel,
        fuzz: f64,
        border: Pixel,
        x: f64,
        y: f64,
        invert: bool,
    );
    status "flop_image" => MagickFlopImage();
    status "forward_fourier_transform_image" => MagickForwardFourierTransformImage(
        magnitude: bool,
    );
    status "frame_image" => MagickFrameImage(
        color: Pixel,
        width: f64,
        height: f64,
        inner_bevel: f64,
        outer_bevel: f64,
        compose: f64,
    );
    magick "fx_image" => MagickFxImage(expression: Text);
    status "gamma_image" => MagickGammaImage(gamma: f64);
    status "gaussian_blur_image" => MagickGaussianBlurImage(radius: f64, sigma: f64);
    status "get_antialias" => MagickGetAntialias();
    pixel "get_background_color" => MagickGetBackgroundColor();
    value "get_colorspace" => MagickGetColorspace();
    value "get_compression" => MagickGetCompression();
    value "get_compression_quality" => MagickGetCompressionQuality();
    value "get_exception_type" => MagickGetExceptionType();
    string "get_filename" => MagickGetFilename();
    string "get_font" => MagickGetFont();
    string "get_format" => MagickGetFormat();
    value "get_gravity" => MagickGetGravity();
    magick "get_image" => MagickGetImage();
    status "get_image_alpha_channel" => MagickGetImageAlphaChannel();
    string "get_image_artifact" => MagickGetImageArtifact(artifact: Text);
    status "get_image_background_color" => MagickGetImageBackgroundColor(color: Pixel);
    status "get_image_border_color" => MagickGetImageBorderColor(color: Pixel);
    status "get_image_colormap_color" => MagickGetImageColormapColor(index: f64, color: Pixel);
    value "get_image_colors" => MagickGetImageColors();
    value "get_image_colorspace" => MagickGetImageColorspace();
    value "get_image_compose" => MagickGetImageCompose();
    value "get_image_compression" => MagickGetImageCompression();
    value "get_image_compression_quality" => MagickGetImageCompressionQuality();
    value "get_image_delay" => MagickGetImageDelay();
    value "get_image_depth" => MagickGetImageDepth();
    value "get_image_dispose" => MagickGetImageDispose();
    value "get_image_endian" => MagickGetImageEndian();
    string "get_image_filename" => MagickGetImageFilename();
    string "get_image_format" => MagickGetImageFormat();
    value "get_image_fuzz" => MagickGetImageFuzz();
    value "get_image_gamma" => MagickGetImageGamma();
    value "get_image_gravity" => MagickGetImageGravity();
    value "get_image_height" => MagickGetImageHeight();
    value "get_image_interlace_scheme" => MagickGetImageInterlaceScheme();
    value "get_image_interpolate_method" => MagickGetImageInterpolateMethod();
    value "get_image_iterations" => MagickGetImageIterations();
    magick "get_image_mask" => MagickGetImageMask(mask_type: f64);
    status "get_image_matte_color" => MagickGetImageMatteColor(color: Pixel);
    value "get_image_orientation" => MagickGetImageOrientation();
    status "get_image_pixel_color" => MagickGetImagePixelColor(x: f64, y: f64, color: Pixel);
    string "get_image_property" => MagickGetImageProperty(property: Text);
    magick "get_image_region" => MagickGetImageRegion(width: f64, height: f64, x: f64, y: f64);
    value "get_image_rendering_intent" => MagickGetImageRenderingIntent();
    value "get_image_scene" => MagickGetImageScene();
    string "get_image_signature" => MagickGetImageSignature();
    value "get_image_ticks_per_second" => MagickGetImageTicksPerSecond();
    value "get_image_total_ink_density" => MagickGetImageTotalInkDensity();
    value "get_image_type" => MagickGetImageType();
    value "get_image_units" => MagickGetImageUnits();
    value "get_image_virtual_pixel_method" => MagickGetImageVirtualPixelMethod();
    value "get_image_width" => MagickGetImageWidth();
    value "get_interlace_scheme" => MagickGetInterlaceScheme();
    value "get_interpolate_method" => MagickGetInterpolateMethod();
    value "get_iterator_index" => MagickGetIteratorIndex();
    value "get_number_images" => MagickGetNumberImages();
    string "get_option" => MagickGetOption(key: Text);
    value "get_orientation" => MagickGetOrientation();
    value "get_pointsize" => MagickGetPointsize();
    value "get_type" => MagickGetType();
    status "hald_clut_image" => MagickHaldClutImage(hald: Magick);
    status "has_next_image" => MagickHasNextImage();
    status "has_previous_image" => MagickHasPreviousImage();
    status "hough_line_image" => MagickHoughLineImage(width: f64, height: f64, threshold: f64);
    string "identify_image" => MagickIdentifyImage();
    value "identify_image_type" => MagickIdentifyImageType();
    status "implode_image" => MagickImplodeImage(radius: f64, method: f64);
    status "interpolative_resize_image" => MagickInterpolativeResizeImage(
        columns: f64,
        rows: f64,
        method: f64,
    );
    status "inverse_fourier_transform_image" => MagickInverseFourierTransformImage(
        phase: Magick,
        magnitude: bool,
    );
    status "kuwahara_image" => MagickKuwaharaImage(radius: f64, sigma: f64);
    status "label_image" => MagickLabelImage(label: Text);
    status "level_image" => MagickLevelImage(black: f64, gamma: f64, white: f64);
    status "level_image_colors" => MagickLevelImageColors(
        black: Pixel,
        white: Pixel,
        invert: bool,
    );
    status "levelize_image" => MagickLevelizeImage(black: f64, gamma: f64, white: f64);
    status "linear_stretch_image" => MagickLinearStretchImage(black: f64, white: f64);
    status "liquid_rescale_image" => MagickLiquidRescaleImage(
        columns: f64,
        rows: f64,
        delta_x: f64,
        rigidity: f64,
    );
    status "local_contrast_image" => MagickLocalContrastImage(radius: f64, strength: f64);
    status "magnify_image" => MagickMagnifyImage();
    status "mean_shift_image" => MagickMeanShiftImage(
        width: f64,
        height: f64,
        color_distance: f64,
    );
    magick "merge_image_layers" => MagickMergeImageLayers(method: f64);
    status "minify_image" => MagickMinifyImage();
    status "modulate_image" => MagickModulateImage(brightness: f64, saturation: f64, hue: f64);
    magick "montage_image" => MagickMontageImage(
        drawing: Drawing,
        tile_geometry: Text,
        thumbnail_geometry: Text,
        mode: f64,
        frame: Text,
    );
    magick "morph_images" => MagickMorphImages(frames: f64);
    status "motion_blur_image" => MagickMotionBlurImage(radius: f64, sigma: f64, angle: f64);
    status "negate_image" => MagickNegateImage(gray: bool);
    status "new_image" => MagickNewImage(columns: f64, rows: f64, background: Pixel);
    status "next_image" => MagickNextImage();
    status "normalize_image" => MagickNormalizeImage();
    status "oil_paint_image" => MagickOilPaintImage(radius: f64, sigma: f64);
    status "opaque_paint_image" => MagickOpaquePaintImage(
        target: Pixel,
        fill: Pixel,
        fuzz: f64,
        invert: bool,
    );
    magick "optimize_image_layers" => MagickOptimizeImageLayers();
    status "optimize_image_transparency" => MagickOptimizeImageTransparency();
    status "ordered_dither_image" => MagickOrderedDitherImage(threshold_map: Text);
    status "ping_image" => MagickPingImage(filename: Text);
    status "polaroid_image" => MagickPolaroidImage(
        drawing: Drawing,
        caption: Text,
        angle: f64,
        method: f64,
    );
    status "posterize_image" => MagickPosterizeImage(levels: f64, dither: f64);
    magick "preview_images" => MagickPreviewImages(preview: f64);
    status "previous_image" => MagickPreviousImage();
    status "quantize_image" => MagickQuantizeImage(
        colors: f64,
        colorspace: f64,
        tree_depth: f64,
        dither: f64,
        measure_error: bool,
    );
    status "quantize_images" => MagickQuantizeImages(
        colors: f64,
        colorspace: f64,
        tree_depth: f64,
        dither: f64,
        measure_error: bool,
    );
    status "raise_image" => MagickRaiseImage(
        width: f64,
        height: f64,
        x: f64,
        y: f64,
        raise: bool,
    );
    status "random_threshold_image" => MagickRandomThresholdImage(low: f64, high: f64);
    status "read_image" => MagickReadImage(filename: Text);
    status "remap_image" => MagickRemapImage(remap: Magick, dither: f64);
    status "remove_image" => MagickRemoveImage();
    status "resample_image" => MagickResampleImage(
        x_resolution: f64,
        y_resolution: f64,
        filter: f64,
    );
    status "reset_image_page" => MagickResetImagePage(page: Text);
    void "reset_iterator" => MagickResetIterator();
    status "resize_image" => MagickResizeImage(columns: f64, rows: f64, filter: f64);
    status "roll_image" => MagickRollImage(x: f64, y: f64);
    status "rotate_image" => MagickRotateImage(background: Pixel, degrees: f64);
    status "rotational_blur_image" => MagickRotationalBlurImage(angle: f64);
    status "sample_image" => MagickSampleImage(columns: f64, rows: f64);
    status "scale_image" => MagickScaleImage(columns: f64, rows: f64);
    status "segment_image" => MagickSegmentImage(
        colorspace: f64,
        verbose: bool,
        cluster_threshold: f64,
        smooth_threshold: f64,
    );
    status "selective_blur_image" => MagickSelectiveBlurImage(
        radius: f64,
        sigma: f64,
        threshold: f64,
    );
    status "separate_image" => MagickSeparateImage(channel: f64);
    status "sepia_tone_image" => MagickSepiaToneImage(threshold: f64);
    status "set_antialias" => MagickSetAntialias(antialias: bool);
    status "set_background_color" => MagickSetBackgroundColor(color: Pixel);
    status "set_colorspace" => MagickSetColorspace(colorspace: f64);
    status "set_compression" => MagickSetCompression(compression: f64);
    status "set_compression_quality" => MagickSetCompressionQuality(quality: f64);
    status "set_depth" => MagickSetDepth(depth: f64);
    status "set_extract" => MagickSetExtract(geometry: Text);
    status "set_filename" => MagickSetFilename(filename: Text);
    void "set_first_iterator" => MagickSetFirstIterator();
    status "set_font" => MagickSetFont(font: Text);
    status "set_format" => MagickSetFormat(format: Text);
    status "set_gravity" => MagickSetGravity(gravity: f64);
    status "set_image" => MagickSetImage(other: Magick);
    status "set_image_alpha" => MagickSetImageAlpha(alpha: f64);
    status "set_image_alpha_channel" => MagickSetImageAlphaChannel(option: f64);
    status "set_image_artifact" => MagickSetImageArtifact(artifact: Text, value: Text);
    status "set_image_background_color" => MagickSetImageBackgroundColor(color: Pixel);
    status "set_image_blue_primary" => MagickSetImageBluePrimary(x: f64, y: f64, z: f64);
    status "set_image_border_color" => MagickSetImageBorderColor(color: Pixel);
    value "set_image_channel_mask" => MagickSetImageChannelMask(mask: f64);
    status "set_image_color" => MagickSetImageColor(color: Pixel);
    status "set_image_colormap_color" => MagickSetImageColormapColor(index: f64, color: Pixel);
    status "set_image_colorspace" => MagickSetImageColorspace(colorspace: f64);
    status "set_image_compose" => MagickSetImageCompose(compose: f64);
    status "set_image_compression" => MagickSetImageCompression(compression: f64);
    status "set_image_compression_quality" => MagickSetImageCompressionQuality(quality: f64);
    status "set_image_delay" => MagickSetImageDelay(delay: f64);
    status "set_image_depth" => MagickSetImageDepth(depth: f64);
    status "set_image_dispose" => MagickSetImageDispose(dispose: f64);
    status "set_image_endian" => MagickSetImageEndian(endian: f64);
    status "set_image_extent" => MagickSetImageExtent(columns: f64, rows: f64);
    status "set_image_filename" => MagickSetImageFilename(filename: Text);
    status "set_image_format" => MagickSetImageFormat(format: Text);
    status "set_image_fuzz" => MagickSetImageFuzz(fuzz: f64);
    status "set_image_gamma" => MagickSetImageGamma(gamma: f64);
    status "set_image_gravity" => MagickSetImageGravity(gravity: f64);
    status "set_image_green_primary" => MagickSetImageGreenPrimary(x: f64, y: f64, z: f64);
    status "set_image_interlace_scheme" => MagickSetImageInterlaceScheme(interlace: f64);
    status "set_image_interpolate_method" => MagickSetImageInterpolateMethod(method: f64);
    status "set_image_iterations" => MagickSetImageIterations(iterations: f64);
    status "set_image_mask" => MagickSetImageMask(mask_type: f64, mask: Magick);
    status "set_image_matte_color" => MagickSetImageMatteColor(color: Pixel);
    status "set_image_orientation" => MagickSetImageOrientation(orientation: f64);
    status "set_image_page" => MagickSetImagePage(width: f64, height: f64, x: f64, y: f64);
    status "set_image_pixel_color" => MagickSetImagePixelColor(x: f64, y: f64, color: Pixel);
    status "set_image_property" => MagickSetImageProperty(property: Text, value: Text);
    status "set_image_red_primary" => MagickSetImageRedPrimary(x: f64, y: f64, z: f64);
    status "set_image_rendering_intent" => MagickSetImageRenderingIntent(intent: f64);
    status "set_image_resolution" => MagickSetImageResolution(
        x_resolution: f64,
        y_resolution: f64,
    );
    status "set_image_scene" => MagickSetImageScene(scene: f64);
    status "set_image_ticks_per_second" => MagickSetImageTicksPerSecond(ticks: f64);
    status "set_image_type" => MagickSetImageType(image_type: f64);
    status "set_image_units" => MagickSetImageUnits(units: f64);
    value "set_image_virtual_pixel_method" => MagickSetImageVirtualPixelMethod(method: f64);
    status "set_image_white_point" => MagickSetImageWhitePoint(x: f64, y: f64, z: f64);
    status "set_interlace_scheme" => MagickSetInterlaceScheme(interlace: f64);
    status "set_interpolate_method" => MagickSetInterpolateMethod(method: f64);
    status "set_iterator_index" => MagickSetIteratorIndex(index: f64);
    void "set_last_iterator" => MagickSetLastIterator();
    status "set_option" => MagickSetOption(key: Text, value: Text);
    status "set_orientation" => MagickSetOrientation(orientation: f64);
    status "set_page" => MagickSetPage(width: f64, height: f64, x: f64, y: f64);
    status "set_passphrase" => MagickSetPassphrase(passphrase: Text);
    status "set_pointsize" => MagickSetPointsize(pointsize: f64);
    status "set_resolution" => MagickSetResolution(x_resolution: f64, y_resolution: f64);
    status "set_security_policy" => MagickSetSecurityPolicy(policy: Text);
    status "set_size" => MagickSetSize(columns: f64, rows: f64);
    status "set_size_offset" => MagickSetSizeOffset(columns: f64, rows: f64, offset: f64);
    status "set_type" => MagickSetType(image_type: f64);
    status "shade_image" => MagickShadeImage(gray: bool, azimuth: f64, elevation: f64);
    status "shadow_image" => MagickShadowImage(alpha: f64, sigma: f64, x: f64, y: f64);
    status "sharpen_image" => MagickSharpenImage(radius: f64, sigma: f64);
    status "shave_image" => MagickShaveImage(columns: f64, rows: f64);
    status "shear_image" => MagickShearImage(background: Pixel, x_shear: f64, y_shear: f64);
    status "sigmoidal_contrast_image" => MagickSigmoidalContrastImage(
        sharpen: bool,
        alpha: f64,
        beta: f64,
    );
    status "sketch_image" => MagickSketchImage(radius: f64, sigma: f64, angle: f64);
    magick "smush_images" => MagickSmushImages(stack: bool, offset: f64);
    status "solarize_image" => MagickSolarizeImage(threshold: f64);
    status "splice_image" => MagickSpliceImage(width: f64, height: f64, x: f64, y: f64);
    status "spread_image" => MagickSpreadImage(method: f64, radius: f64);
    status "statistic_image" => MagickStatisticImage(statistic: f64, width: f64, height: f64);
    magick "stegano_image" => MagickSteganoImage(watermark: Magick, offset: f64);
    magick "stereo_image" => MagickStereoImage(offset: Magick);
    status "strip_image" => MagickStripImage();
    status "swirl_image" => MagickSwirlImage(degrees: f64, method: f64);
    magick "texture_image" => MagickTextureImage(texture: Magick);
    status "threshold_image" => MagickThresholdImage(threshold: f64);
    status "threshold_image_channel" => MagickThresholdImageChannel(
        channel: f64,
        threshold: f64,
    );
    status "thumbnail_image" => MagickThumbnailImage(columns: f64, rows: f64);
    status "tint_image" => MagickTintImage(tint: Pixel, blend: Pixel);
    status "transform_image_colorspace" => MagickTransformImageColorspace(colorspace: f64);
    status "transparent_paint_image" => MagickTransparentPaintImage(
        target: Pixel,
        alpha: f64,
        fuzz: f64,
        invert: bool,
    );
    status "transpose_image" => MagickTransposeImage();
    status "transverse_image" => MagickTransverseImage();
    status "trim_image" => MagickTrimImage(fuzz: f64);
    status "unique_image_colors" => MagickUniqueImageColors();
    status "unsharp_mask_image" => MagickUnsharpMaskImage(
        radius: f64,
        sigma: f64,
        gain: f64,
        threshold: f64,
    );
    status "vignette_image" => MagickVignetteImage(radius: f64, sigma: f64, x: f64, y: f64);
    status "wave_image" => MagickWaveImage(amplitude: f64, wave_length: f64, method: f64);
    status "wavelet_denoise_image" => MagickWaveletDenoiseImage(threshold: f64, softness: f64);
    status "white_balance_image" => MagickWhiteBalanceImage();
    status "white_threshold_image" => MagickWhiteThresholdImage(threshold: Pixel);
    status "write_image" => MagickWriteImage(filename: Text);
    status "write_images" => MagickWriteImages(filename: Text, adjoin: bool);
}

pub(crate) const HANDWRITTEN: &[&str] = &[
    "compare_images",
    "distort_image",
    "export_image_pixels",
    "get_image_artifacts",
    "get_image_blob",
    "get_image_blue_primary",
    "get_image_distortion",
    "get_image_green_primary",
    "get_image_histogram",
    "get_image_kurtosis",
    "get_image_length",
    "get_image_mean",
    "get_image_page",
    "get_image_profile",
    "get_image_profiles",
    "get_image_properties",
    "get_image_range",
    "get_image_red_primary",
    "get_image_resolution",
    "get_image_white_point",
    "get_images_blob",
    "get_options",
    "get_page",
    "get_resolution",
    "get_size",
    "get_size_offset",
    "import_image_pixels",
    "ping_image_blob",
    "profile_image",
    "query_font_metrics",
    "query_multiline_font_metrics",
    "read_image_blob",
    "remove_image_profile",
    "set_image_profile",
];

/// Number of values in a font metrics array
const FONT_METRICS: usize = 13;

type ListFn =
    unsafe extern "C" fn(*mut MagickWand, *const c_char, *mut usize) -> *mut *mut c_char;
type BlobFn = unsafe extern "C" fn(*mut MagickWand, *mut usize) -> *mut u8;
type ChromaFn = unsafe extern "C" fn(
    *mut MagickWand,
    *mut f64,
    *mut f64,
    *mut f64,
) -> magick_sys::MagickBooleanType;
type MetricsFn = unsafe extern "C" fn(
    *mut MagickWand,
    *const magick_sys::DrawingWand,
    *const c_char,
) -> *mut f64;

fn list(
    lua: &Lua,
    this: &MagickHandle,
    pattern: &Text,
    f: ListFn,
) -> LuaResult<LuaVariadic<LuaString>> {
    let mut len = 0;
    let raw = unsafe { f(this.as_ptr(), pattern.as_ptr(), &raw mut len) };
    strings(lua, raw, len).map(LuaVariadic::from_iter)
}

fn blob(lua: &Lua, this: &MagickHandle, native: &str, f: BlobFn) -> LuaResult<Outcome<LuaString>> {
    let mut len = 0;
    let raw = unsafe { f(this.as_ptr(), &raw mut len) };

    match unsafe { MagickBuffer::from_raw(raw, len) } {
        Some(buf) => lua.create_string(buf.as_slice()).map(Outcome::Done),
        None => Ok(Outcome::Failed(this.fail(native))),
    }
}

fn chromaticity(this: &MagickHandle, native: &str, f: ChromaFn) -> Outcome<(f64, f64, f64)> {
    let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
    let ret = unsafe { f(this.as_ptr(), &raw mut x, &raw mut y, &raw mut z) };
    Outcome::check(this, ret, native, (x, y, z))
}

/// A table of font metrics, or no values at all if the library returned NULL
fn metrics(
    lua: &Lua,
    this: &MagickHandle,
    drawing: &Drawing,
    text: &Text,
    f: MetricsFn,
) -> LuaResult<LuaMultiValue> {
    let raw = unsafe { f(this.as_ptr(), drawing.marshal(), text.as_ptr()) };

    match unsafe { MagickBuffer::from_raw(raw, FONT_METRICS) } {
        Some(m) => m.as_slice().to_vec().into_lua_multi(lua),
        None => Ok(LuaMultiValue::new()),
    }
}

/// Element count of a pixel region for a channel map such as `"RGBA"`
fn region_len(columns: usize, rows: usize, map: &Text) -> LuaResult<usize> {
    columns
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(map.len()))
        .ok_or_else(|| LuaError::runtime("pixel region is too large"))
}

/// A zeroed buffer for `len` channel values.  Allocation failure is a Lua
/// error rather than an abort.
fn region_buffer(len: usize) -> LuaResult<Vec<f64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|e| {
        LuaError::runtime(format!("cannot allocate a pixel region of {len} values: {e}"))
    })?;
    buf.resize(len, 0.0);
    Ok(buf)
}

#[allow(clippy::too_many_lines)]
pub(crate) fn register(lua: &Lua, surface: Surface) -> LuaResult<()> {
    lua.register_userdata_type::<MagickHandle>(|reg| {
        register_generated(reg, surface);

        add_method!(
            reg,
            surface,
            FAMILY,
            "distort_image",
            |_, this, (method, args, bestfit): (f64, Vec<f64>, bool)| {
                let ret = unsafe {
                    magick_sys::MagickDistortImage(
                        this.as_ptr(),
                        method.marshal(),
                        args.len(),
                        args.as_ptr(),
                        bestfit.marshal(),
                    )
                };
                Ok(status(this, ret, "MagickDistortImage"))
            }
        );

        add_method!(reg, surface, FAMILY, "get_options", |lua, this, pattern: Text| {
            list(lua, this, &pattern, magick_sys::MagickGetOptions)
        });

        add_method!(reg, surface, FAMILY, "get_image_artifacts", |lua, this, pattern: Text| {
            list(lua, this, &pattern, magick_sys::MagickGetImageArtifacts)
        });

        add_method!(reg, surface, FAMILY, "get_image_profiles", |lua, this, pattern: Text| {
            list(lua, this, &pattern, magick_sys::MagickGetImageProfiles)
        });

        add_method!(reg, surface, FAMILY, "get_image_properties", |lua, this, pattern: Text| {
            list(lua, this, &pattern, magick_sys::MagickGetImageProperties)
        });

        add_method!(reg, surface, FAMILY, "read_image_blob", |_, this, data: LuaString| {
            let data = data.as_bytes();
            let ret = unsafe {
                magick_sys::MagickReadImageBlob(this.as_ptr(), data.as_ptr().cast(), data.len())
            };
            Ok(status(this, ret, "MagickReadImageBlob"))
        });

        add_method!(reg, surface, FAMILY, "ping_image_blob", |_, this, data: LuaString| {
            let data = data.as_bytes();
            let ret = unsafe {
                magick_sys::MagickPingImageBlob(this.as_ptr(), data.as_ptr().cast(), data.len())
            };
            Ok(status(this, ret, "MagickPingImageBlob"))
        });

        add_method!(reg, surface, FAMILY, "get_image_blob", |lua, this, ()| {
            blob(lua, this, "MagickGetImageBlob", magick_sys::MagickGetImageBlob)
        });

        add_method!(reg, surface, FAMILY, "get_images_blob", |lua, this, ()| {
            blob(lua, this, "MagickGetImagesBlob", magick_sys::MagickGetImagesBlob)
        });

        add_method!(reg, surface, FAMILY, "get_image_profile", |lua, this, name: Text| {
            let mut len = 0;
            let raw = unsafe {
                magick_sys::MagickGetImageProfile(this.as_ptr(), name.as_ptr(), &raw mut len)
            };
            unsafe { MagickBuffer::from_raw(raw, len) }
                .map(|p| lua.create_string(p.as_slice()))
                .transpose()
        });

        add_method!(reg, surface, FAMILY, "remove_image_profile", |lua, this, name: Text| {
            let mut len = 0;
            let raw = unsafe {
                magick_sys::MagickRemoveImageProfile(this.as_ptr(), name.as_ptr(), &raw mut len)
            };
            unsafe { MagickBuffer::from_raw(raw, len) }
                .map(|p| lua.create_string(p.as_slice()))
                .transpose()
        });

        add_method!(
            reg,
            surface,
            FAMILY,
            "set_image_profile",
            |_, this, (name, data): (Text, LuaString)| {
                let data = data.as_bytes();
                let ret = unsafe {
                    magick_sys::MagickSetImageProfile(
                        this.as_ptr(),
                        name.as_ptr(),
                        data.as_ptr().cast(),
                        data.len(),
                    )
                };
                Ok(status(this, ret, "MagickSetImageProfile"))
            }
        );

        add_method!(
            reg,
            surface,
            FAMILY,
            "profile_image",
            |_, this, (name, data): (Text, Option<LuaString>)| {
                let data = data.as_ref().map(LuaString::as_bytes);
                let (ptr, len) = data
                    .as_deref()
                    .map_or((std::ptr::null(), 0), |d| (d.as_ptr().cast::<c_void>(), d.len()));
                let ret = unsafe {
                    magick_sys::MagickProfileImage(this.as_ptr(), name.as_ptr(), ptr, len)
                };
                Ok(status(this, ret, "MagickProfileImage"))
            }
        );

        add_method!(
            reg,
            surface,
            FAMILY,
            "query_font_metrics",
            |lua, this, (drawing, text): (Drawing, Text)| {
                metrics(lua, this, &drawing, &text, magick_sys::MagickQueryFontMetrics)
            }
        );

        add_method!(
            reg,
            surface,
            FAMILY,
            "query_multiline_font_metrics",
            |lua, this, (drawing, text): (Drawing, Text)| {
                metrics(
                    lua,
                    this,
                    &drawing,
                    &text,
                    magick_sys::MagickQueryMultilineFontMetrics,
                )
            }
        );

        add_method!(reg, surface, FAMILY, "get_image_page", |_, this, ()| {
            let (mut w, mut h, mut x, mut y) = (0_usize, 0_usize, 0_isize, 0_isize);
            let ret = unsafe {
                magick_sys::MagickGetImagePage(
                    this.as_ptr(),
                    &raw mut w,
                    &raw mut h,
                    &raw mut x,
                    &raw mut y,
                )
            };
            Ok(Outcome::check(this, ret, "MagickGetImagePage", (w, h, x, y)))
        });

        add_method!(reg, surface, FAMILY, "get_page", |_, this, ()| {
            let (mut w, mut h, mut x, mut y) = (0_usize, 0_usize, 0_isize, 0_isize);
            let ret = unsafe {
                magick_sys::MagickGetPage(
                    this.as_ptr(),
                    &raw mut w,
                    &raw mut h,
                    &raw mut x,
                    &raw mut y,
                )
            };
            Ok(Outcome::check(this, ret, "MagickGetPage", (w, h, x, y)))
        });

        add_method!(reg, surface, FAMILY, "get_image_resolution", |_, this, ()| {
            let (mut x, mut y) = (0.0, 0.0);
            let ret = unsafe {
                magick_sys::MagickGetImageResolution(this.as_ptr(), &raw mut x, &raw mut y)
            };
            Ok(Outcome::check(this, ret, "MagickGetImageResolution", (x, y)))
        });

        add_method!(reg, surface, FAMILY, "get_resolution", |_, this, ()| {
            let (mut x, mut y) = (0.0, 0.0);
            let ret =
                unsafe { magick_sys::MagickGetResolution(this.as_ptr(), &raw mut x, &raw mut y) };
            Ok(Outcome::check(this, ret, "MagickGetResolution", (x, y)))
        });

        add_method!(reg, surface, FAMILY, "get_size", |_, this, ()| {
            let (mut columns, mut rows) = (0_usize, 0_usize);
            let ret = unsafe {
                magick_sys::MagickGetSize(this.as_ptr(), &raw mut columns, &raw mut rows)
            };
            Ok(Outcome::check(this, ret, "MagickGetSize", (columns, rows)))
        });

        add_method!(reg, surface, FAMILY, "get_size_offset", |_, this, ()| {
            let mut offset = 0_isize;
            let ret = unsafe { magick_sys::MagickGetSizeOffset(this.as_ptr(), &raw mut offset) };
            Ok(Outcome::check(this, ret, "MagickGetSizeOffset", offset))
        });

        add_method!(reg, surface, FAMILY, "get_image_length", |_, this, ()| {
            let mut len: magick_sys::MagickSizeType = 0;
            let ret = unsafe { magick_sys::MagickGetImageLength(this.as_ptr(), &raw mut len) };
            Ok(Outcome::check(this, ret, "MagickGetImageLength", len))
        });

        add_method!(reg, surface, FAMILY, "get_image_red_primary", |_, this, ()| {
            Ok(chromaticity(this, "MagickGetImageRedPrimary", magick_sys::MagickGetImageRedPrimary))
        });

        add_method!(reg, surface, FAMILY, "get_image_green_primary", |_, this, ()| {
            Ok(chromaticity(
                this,
                "MagickGetImageGreenPrimary",
                magick_sys::MagickGetImageGreenPrimary,
            ))
        });

        add_method!(reg, surface, FAMILY, "get_image_blue_primary", |_, this, ()| {
            Ok(chromaticity(this, "MagickGetImageBluePrimary", magick_sys::MagickGetImageBluePrimary))
        });

        add_method!(reg, surface, FAMILY, "get_image_white_point", |_, this, ()| {
            Ok(chromaticity(this, "MagickGetImageWhitePoint", magick_sys::MagickGetImageWhitePoint))
        });

        add_method!(reg, surface, FAMILY, "get_image_mean", |_, this, ()| {
            let (mut mean, mut stddev) = (0.0, 0.0);
            let ret = unsafe {
                magick_sys::MagickGetImageMean(this.as_ptr(), &raw mut mean, &raw mut stddev)
            };
            Ok(Outcome::check(this, ret, "MagickGetImageMean", (mean, stddev)))
        });

        add_method!(reg, surface, FAMILY, "get_image_range", |_, this, ()| {
            let (mut minima, mut maxima) = (0.0, 0.0);
            let ret = unsafe {
                magick_sys::MagickGetImageRange(this.as_ptr(), &raw mut minima, &raw mut maxima)
            };
            Ok(Outcome::check(this, ret, "MagickGetImageRange", (minima, maxima)))
        });

        add_method!(reg, surface, FAMILY, "get_image_kurtosis", |_, this, ()| {
            let (mut kurtosis, mut skewness) = (0.0, 0.0);
            let ret = unsafe {
                magick_sys::MagickGetImageKurtosis(
                    this.as_ptr(),
                    &raw mut kurtosis,
                    &raw mut skewness,
                )
            };
            Ok(Outcome::check(this, ret, "MagickGetImageKurtosis", (kurtosis, skewness)))
        });

        add_method!(
            reg,
            surface,
            FAMILY,
            "get_image_distortion",
            |_, this, (reference, metric): (Magick, f64)| {
                let mut distortion = 0.0;
                let ret = unsafe {
                    magick_sys::MagickGetImageDistortion(
                        this.as_ptr(),
                        reference.marshal(),
                        metric.marshal(),
                        &raw mut distortion,
                    )
                };
                Ok(Outcome::check(this, ret, "MagickGetImageDistortion", distortion))
            }
        );

        add_method!(
            reg,
            surface,
            FAMILY,
            "compare_images",
            |lua, this, (reference, metric): (Magick, f64)| {
                let mut distortion = 0.0;
                let raw = unsafe {
                    magick_sys::MagickCompareImages(
                        this.as_ptr(),
                        reference.marshal(),
                        metric.marshal(),
                        &raw mut distortion,
                    )
                };

                Ok(match wrap::<_, MagickHandle>(lua, this, raw, "MagickCompareImages")? {
                    Outcome::Done(diff) => Outcome::Done((diff, distortion)),
                    Outcome::Failed(e) => Outcome::Failed(e),
                })
            }
        );

        add_method!(reg, surface, FAMILY, "get_image_histogram", |lua, this, ()| {
            let mut len = 0;
            let raw = unsafe { magick_sys::MagickGetImageHistogram(this.as_ptr(), &raw mut len) };
            let Some(colors) = (unsafe { MagickBuffer::<*mut PixelWand>::from_raw(raw, len) })
            else {
                return Ok(Outcome::Failed(this.fail("MagickGetImageHistogram")));
            };

            // Take ownership of every element first so none leak on error
            let handles: Vec<_> = colors
                .as_slice()
                .iter()
                .filter_map(|&p| unsafe { PixelHandle::from_raw(p) })
                .collect();
            drop(colors);

            handles
                .into_iter()
                .map(|h| lua.create_any_userdata(h))
                .collect::<LuaResult<Vec<_>>>()
                .map(Outcome::Done)
        });

        add_method!(
            reg,
            surface,
            FAMILY,
            "export_image_pixels",
            |_, this, (x, y, columns, rows, map): (f64, f64, f64, f64, Text)| {
                let (columns, rows): (usize, usize) = (columns.marshal(), rows.marshal());
                let mut pixels = region_buffer(region_len(columns, rows, &map)?)?;
                let ret = unsafe {
                    magick_sys::MagickExportImagePixels(
                        this.as_ptr(),
                        x.marshal(),
                        y.marshal(),
                        columns,
                        rows,
                        map.as_ptr(),
                        StorageType_DoublePixel,
                        pixels.as_mut_ptr().cast(),
                    )
                };
                Ok(Outcome::check(this, ret, "MagickExportImagePixels", pixels))
            }
        );

        add_method!(
            reg,
            surface,
            FAMILY,
            "import_image_pixels",
            |_, this, (x, y, columns, rows, map, pixels): (f64, f64, f64, f64, Text, Vec<f64>)| {
                let (columns, rows): (usize, usize) = (columns.marshal(), rows.marshal());
                let expected = region_len(columns, rows, &map)?;

                if pixels.len() != expected {
                    return Err(LuaError::runtime(format!(
                        "expected {expected} pixel values, got {}",
                        pixels.len()
                    )));
                }

                let ret = unsafe {
                    magick_sys::MagickImportImagePixels(
                        this.as_ptr(),
                        x.marshal(),
                        y.marshal(),
                        columns,
                        rows,
                        map.as_ptr(),
                        StorageType_DoublePixel,
                        pixels.as_ptr().cast(),
                    )
                };
                Ok(status(this, ret, "MagickImportImagePixels"))
            }
        );

        crate::add_tostring(reg);
    })
}

#[cfg(test)]
mod test {
    use crate::{surface::Surface, test::state};

    const RED_IMAGE: &str = r#"
        local red = magick.new_pixel_wand()
        assert(red:set_color("red"))
        local w = magick.new_magick_wand()
        assert(w:new_image(4, 3, red))
    "#;

    fn run(surface: Surface, script: &str) {
        state(surface)
            .load(format!("{RED_IMAGE}\n{script}"))
            .exec()
            .unwrap();
    }

    #[test]
    fn test_bad_arguments_raise_before_native_call() {
        state(Surface::Full)
            .load(
                r#"
                local w = magick.new_magick_wand()
                local d = magick.new_drawing_wand()

                assert(not pcall(w.read_image, w, {}))
                assert(not pcall(w.read_image, w, "a\0b"))
                assert(not pcall(w.new_image, w, "wide", 3, magick.new_pixel_wand()))
                assert(not pcall(w.new_image, w, 4, 3, d))
                assert(not pcall(w.add_image, w, 42))
                assert(not pcall(w.read_image))
                assert(w:get_number_images() == 0)
                "#,
            )
            .exec()
            .unwrap();
    }

    #[test]
    fn test_native_failure_returns_message() {
        state(Surface::Lite)
            .load(
                r#"
                local w = magick.new_magick_wand()
                local ok, msg = w:read_image("/nonexistent/luamagick/input.png")
                assert(ok == nil)
                assert(type(msg) == "string" and #msg > 0)
                assert(w:get_number_images() == 0)
                "#,
            )
            .exec()
            .unwrap();
    }

    #[test]
    fn test_new_handles_round_trip() {
        run(
            Surface::Lite,
            r#"
            assert(w:get_image_width() == 4)
            assert(w:get_image_height() == 3)

            local out = magick.new_pixel_wand()
            assert(w:get_image_pixel_color(1, 1, out))
            assert(out:get_red() > 0.99 and out:get_green() < 0.01)

            local copy = w:clone()
            assert(copy:get_image_width() == 4)
            assert(copy:resize_image(8, 6, 0))
            assert(w:get_image_width() == 4)
            "#,
        );
    }

    #[test]
    fn test_blob_round_trip() {
        run(
            Surface::Lite,
            r#"
            assert(w:set_image_format("MIFF"))
            local blob = assert(w:get_image_blob())
            assert(#blob > 0)

            local back = magick.new_magick_wand()
            assert(back:read_image_blob(blob))
            assert(back:get_image_width() == 4)
            assert(back:get_image_height() == 3)
            "#,
        );
    }

    #[test]
    fn test_out_parameters() {
        run(
            Surface::Full,
            r#"
            assert(w:set_image_page(4, 3, 1, 2))
            local pw, ph, px, py = w:get_image_page()
            assert(pw == 4 and ph == 3 and px == 1 and py == 2)

            assert(w:set_image_resolution(72, 96))
            local rx, ry = w:get_image_resolution()
            assert(rx == 72 and ry == 96)

            local mean, stddev = w:get_image_mean()
            assert(mean > 0 and stddev >= 0)
            "#,
        );
    }

    #[test]
    fn test_pixels_and_histogram() {
        run(
            Surface::Full,
            r#"
            local px = w:export_image_pixels(0, 0, 2, 1, "RGB")
            assert(#px == 6)
            assert(px[1] > 0.99 and px[2] < 0.01 and px[3] < 0.01)

            assert(not pcall(w.import_image_pixels, w, 0, 0, 2, 1, "RGB", {0, 0, 1}))
            assert(w:import_image_pixels(0, 0, 1, 1, "RGB", {0, 0, 1}))

            local hist = w:get_image_histogram()
            assert(#hist == 2)
            local total = 0
            for _, p in ipairs(hist) do
                total = total + p:get_color_count()
            end
            assert(total == 12)
            "#,
        );
    }

    #[test]
    fn test_name_lists() {
        run(
            Surface::Compact,
            r#"
            assert(w:set_option("luamagick:first", "1"))
            assert(w:set_option("luamagick:second", "2"))
            assert(select("#", w:get_options("luamagick:*")) == 2)
            assert(w:get_option("luamagick:first") == "1")

            assert(w:set_image_property("comment", "hello"))
            assert(w:get_image_property("comment") == "hello")
            assert(select("#", w:get_image_properties("comment")) == 1)
            "#,
        );
    }

    #[test]
    fn test_distort_checks_every_argument() {
        run(
            Surface::Full,
            r#"
            local srt = magick.DistortMethod.ScaleRotateTranslateDistortion
            assert(not pcall(w.distort_image, w, srt, {1, "x"}, false))
            assert(w:distort_image(srt, {0}, false))
            "#,
        );
    }

    #[test]
    fn test_iteration_reports_the_end() {
        run(
            Surface::Lite,
            r#"
            w:reset_iterator()
            assert(w:next_image())
            local ok, msg = w:next_image()
            assert(ok == nil and type(msg) == "string" and #msg > 0)

            local more, why = w:has_next_image()
            assert(more == nil and #why > 0)
            "#,
        );
    }

    #[test]
    fn test_compare_images() {
        run(
            Surface::Full,
            r#"
            local rmse = magick.MetricType.RootMeanSquaredErrorMetric
            local same = w:clone()

            local diff, distortion = w:compare_images(same, rmse)
            assert(diff and distortion < 1e-9)
            assert(diff:get_image_width() == 4 and diff:get_image_height() == 3)
            assert(w:get_image_distortion(same, rmse) < 1e-9)

            assert(same:negate_image(false))
            local _, changed = w:compare_images(same, rmse)
            assert(changed > 0)
            assert(w:get_image_distortion(same, rmse) > 0)
            "#,
        );
    }

    #[test]
    fn test_layers_and_dither() {
        run(
            Surface::Full,
            r#"
            local seq = w:clone()
            assert(seq:add_image(w))
            local layers = assert(seq:compare_images_layers(magick.LayerMethod.CompareAnyLayer))
            assert(layers:get_number_images() == 2)

            assert(w:ordered_dither_image("threshold"))
            local ok, msg = w:ordered_dither_image("no-such-threshold-map")
            assert(ok == nil and #msg > 0)
            "#,
        );
    }

    #[test]
    fn test_profiles() {
        run(
            Surface::Compact,
            r#"
            assert(w:set_image_profile("luamagick", "payload\0bytes"))
            assert(w:get_image_profile("luamagick") == "payload\0bytes")
            assert(select("#", w:get_image_profiles("luamagick")) == 1)

            assert(w:remove_image_profile("luamagick") == "payload\0bytes")
            assert(w:get_image_profile("luamagick") == nil)

            assert(w:set_image_profile("luamagick", "again"))
            assert(w:profile_image("luamagick"))
            assert(w:get_image_profile("luamagick") == nil)
            "#,
        );
    }

    #[test]
    fn test_sequence_blob_ping() {
        run(
            Surface::Compact,
            r#"
            assert(w:set_image_format("MIFF"))
            local seq = w:clone()
            assert(seq:add_image(w))
            assert(seq:get_number_images() == 2)
            local blob = assert(seq:get_images_blob())

            local pinged = magick.new_magick_wand()
            assert(pinged:ping_image_blob(blob))
            assert(pinged:get_number_images() == 2)
            assert(pinged:get_image_width() == 4)
            "#,
        );
    }

    #[test]
    fn test_more_out_parameters() {
        run(
            Surface::Compact,
            r#"
            assert(w:set_image_red_primary(0.64, 0.33, 0.03))
            local x, y, z = w:get_image_red_primary()
            assert(x == 0.64 and y == 0.33 and z == 0.03)
            assert(w:set_image_white_point(0.3127, 0.329, 0.3583))
            assert(w:get_image_white_point() == 0.3127)
            assert(type(select(3, w:get_image_green_primary())) == "number")
            assert(type(select(3, w:get_image_blue_primary())) == "number")

            assert(w:set_size(5, 7))
            local columns, rows = w:get_size()
            assert(columns == 5 and rows == 7)
            assert(w:set_size_offset(5, 7, 2))
            assert(w:get_size_offset() == 2)

            assert(w:set_page(10, 20, 1, 2))
            local pw, ph, px, py = w:get_page()
            assert(pw == 10 and ph == 20 and px == 1 and py == 2)

            local len = w:get_image_length()
            assert(type(len) == "number" and len >= 0)
            local lo, hi = w:get_image_range()
            assert(lo == 0 and hi > 0)
            local k, s = w:get_image_kurtosis()
            assert(type(k) == "number" and type(s) == "number")
            "#,
        );
    }

    #[test]
    fn test_oversized_region_is_an_error() {
        run(
            Surface::Full,
            r#"
            local ok, err = pcall(w.export_image_pixels, w, 0, 0, 1e9, 1e9, "RGBA")
            assert(not ok and tostring(err):find("cannot allocate"), tostring(err))

            ok, err = pcall(w.export_image_pixels, w, 0, 0, 1e12, 1e12, "RGBA")
            assert(not ok and tostring(err):find("too large"), tostring(err))

            assert(#w:export_image_pixels(0, 0, 1, 1, "RGBA") == 4)
            "#,
        );
    }

    #[test]
    fn test_font_metrics_without_image() {
        state(Surface::Full)
            .load(
                r#"
                local w = magick.new_magick_wand()
                local d = magick.new_drawing_wand()
                assert(select("#", w:query_font_metrics(d, "text")) == 0)
                assert(select("#", w:query_multiline_font_metrics(d, "text")) == 0)
                "#,
            )
            .exec()
            .unwrap();
    }
}
