//! Enum constant tables exported by the full surface

use crate::prelude::*;

macro_rules! enums {
    ($($enum:ident { $($variant:ident),* $(,)? })*) => {
        /// Names of every exported enum table
        pub(crate) const ENUMS: &[&str] = &[$(stringify!($enum)),*];

        /// Set one table per enum on `module`, mapping variant names to their
        /// native values
        pub(crate) fn install(lua: &Lua, module: &LuaTable) -> LuaResult<()> {
            $(
                let table = lua.create_table()?;
                paste::paste! {
                    $(table.set(stringify!($variant), magick_sys::[<$enum _ $variant>])?;)*
                }
                module.set(stringify!($enum), table)?;
            )*

            trace!(count = ENUMS.len(), "Installed constant tables");
            Ok(())
        }
    };
}

enums! {
    AlignType { UndefinedAlign, LeftAlign, CenterAlign, RightAlign }

    AlphaChannelOption {
        UndefinedAlphaChannel,
        ActivateAlphaChannel,
        AssociateAlphaChannel,
        BackgroundAlphaChannel,
        CopyAlphaChannel,
        DeactivateAlphaChannel,
        DiscreteAlphaChannel,
        DisassociateAlphaChannel,
        ExtractAlphaChannel,
        OffAlphaChannel,
        OnAlphaChannel,
        OpaqueAlphaChannel,
        RemoveAlphaChannel,
        SetAlphaChannel,
        ShapeAlphaChannel,
        TransparentAlphaChannel,
    }

    AutoThresholdMethod {
        UndefinedThresholdMethod,
        KapurThresholdMethod,
        OTSUThresholdMethod,
        TriangleThresholdMethod,
    }

    CacheType { UndefinedCache, DiskCache, DistributedCache, MapCache, MemoryCache, PingCache }

    ChannelType {
        UndefinedChannel,
        RedChannel,
        GrayChannel,
        CyanChannel,
        LChannel,
        GreenChannel,
        MagentaChannel,
        aChannel,
        BlueChannel,
        bChannel,
        YellowChannel,
        BlackChannel,
        AlphaChannel,
        OpacityChannel,
        IndexChannel,
        ReadMaskChannel,
        WriteMaskChannel,
        MetaChannel,
        CompositeMaskChannel,
        CompositeChannels,
        AllChannels,
        TrueAlphaChannel,
        RGBChannels,
        GrayChannels,
        SyncChannels,
        DefaultChannels,
    }

    ClassType { UndefinedClass, DirectClass, PseudoClass }

    ClipPathUnits { UndefinedPathUnits, UserSpace, UserSpaceOnUse, ObjectBoundingBox }

    ColorspaceType {
        UndefinedColorspace,
        CMYColorspace,
        CMYKColorspace,
        GRAYColorspace,
        HCLColorspace,
        HCLpColorspace,
        HSBColorspace,
        HSIColorspace,
        HSLColorspace,
        HSVColorspace,
        HWBColorspace,
        LabColorspace,
        LCHColorspace,
        LCHabColorspace,
        LCHuvColorspace,
        LogColorspace,
        LMSColorspace,
        LuvColorspace,
        OHTAColorspace,
        Rec601YCbCrColorspace,
        Rec709YCbCrColorspace,
        RGBColorspace,
        scRGBColorspace,
        sRGBColorspace,
        TransparentColorspace,
        xyYColorspace,
        XYZColorspace,
        YCbCrColorspace,
        YCCColorspace,
        YDbDrColorspace,
        YIQColorspace,
        YPbPrColorspace,
        YUVColorspace,
        LinearGRAYColorspace,
    }

    CommandOption {
        MagickUndefinedOptions,
        MagickAlignOptions,
        MagickAlphaChannelOptions,
        MagickAutoThresholdOptions,
        MagickBooleanOptions,
        MagickCacheOptions,
        MagickChannelOptions,
        MagickClassOptions,
        MagickClipPathOptions,
        MagickCoderOptions,
        MagickColorOptions,
        MagickColorspaceOptions,
        MagickCommandOptions,
        MagickComplexOptions,
        MagickComplianceOptions,
        MagickComposeOptions,
        MagickCompressOptions,
        MagickConfigureOptions,
        MagickDataTypeOptions,
        MagickDebugOptions,
        MagickDecorateOptions,
        MagickDelegateOptions,
        MagickDirectionOptions,
        MagickDisposeOptions,
        MagickDistortOptions,
        MagickDitherOptions,
        MagickEndianOptions,
        MagickEvaluateOptions,
        MagickFillRuleOptions,
        MagickFilterOptions,
        MagickFontOptions,
        MagickFontsOptions,
        MagickFormatOptions,
        MagickFunctionOptions,
        MagickGradientOptions,
        MagickGravityOptions,
        MagickIntensityOptions,
        MagickIntentOptions,
        MagickInterlaceOptions,
        MagickInterpolateOptions,
        MagickKernelOptions,
        MagickLayerOptions,
        MagickLineCapOptions,
        MagickLineJoinOptions,
        MagickListOptions,
        MagickLocaleOptions,
        MagickLogEventOptions,
        MagickLogOptions,
        MagickMagicOptions,
        MagickMethodOptions,
        MagickMetricOptions,
        MagickMimeOptions,
        MagickModeOptions,
        MagickModuleOptions,
        MagickMorphologyOptions,
        MagickNoiseOptions,
        MagickOrientationOptions,
        MagickPixelChannelOptions,
        MagickPixelIntensityOptions,
        MagickPixelMaskOptions,
        MagickPixelTraitOptions,
        MagickPolicyOptions,
        MagickPolicyDomainOptions,
        MagickPolicyRightsOptions,
        MagickPreviewOptions,
        MagickPrimitiveOptions,
        MagickQuantumFormatOptions,
        MagickResolutionOptions,
        MagickResourceOptions,
        MagickSparseColorOptions,
        MagickStatisticOptions,
        MagickStorageOptions,
        MagickStretchOptions,
        MagickStyleOptions,
        MagickThresholdOptions,
        MagickTypeOptions,
        MagickValidateOptions,
        MagickVirtualPixelOptions,
        MagickWeightOptions,
    }

    ComplexOperator {
        UndefinedComplexOperator,
        AddComplexOperator,
        ConjugateComplexOperator,
        DivideComplexOperator,
        MagnitudePhaseComplexOperator,
        MultiplyComplexOperator,
        RealImaginaryComplexOperator,
        SubtractComplexOperator,
    }

    ComplianceType {
        UndefinedCompliance,
        NoCompliance,
        CSSCompliance,
        SVGCompliance,
        X11Compliance,
        XPMCompliance,
        MVGCompliance,
        AllCompliance,
    }

    CompositeOperator {
        UndefinedCompositeOp,
        AlphaCompositeOp,
        AtopCompositeOp,
        BlendCompositeOp,
        BlurCompositeOp,
        BumpmapCompositeOp,
        ChangeMaskCompositeOp,
        ClearCompositeOp,
        ColorBurnCompositeOp,
        ColorDodgeCompositeOp,
        ColorizeCompositeOp,
        CopyAlphaCompositeOp,
        CopyBlackCompositeOp,
        CopyBlueCompositeOp,
        CopyCompositeOp,
        CopyCyanCompositeOp,
        CopyGreenCompositeOp,
        CopyMagentaCompositeOp,
        CopyRedCompositeOp,
        CopyYellowCompositeOp,
        DarkenCompositeOp,
        DarkenIntensityCompositeOp,
        DifferenceCompositeOp,
        DisplaceCompositeOp,
        DissolveCompositeOp,
        DistortCompositeOp,
        DivideDstCompositeOp,
        DivideSrcCompositeOp,
        DstAtopCompositeOp,
        DstCompositeOp,
        DstInCompositeOp,
        DstOutCompositeOp,
        DstOverCompositeOp,
        ExclusionCompositeOp,
        HardLightCompositeOp,
        HardMixCompositeOp,
        HueCompositeOp,
        InCompositeOp,
        IntensityCompositeOp,
        LightenCompositeOp,
        LightenIntensityCompositeOp,
        LinearBurnCompositeOp,
        LinearDodgeCompositeOp,
        LinearLightCompositeOp,
        LuminizeCompositeOp,
        MathematicsCompositeOp,
        MinusDstCompositeOp,
        MinusSrcCompositeOp,
        ModulateCompositeOp,
        ModulusAddCompositeOp,
        ModulusSubtractCompositeOp,
        MultiplyCompositeOp,
        NoCompositeOp,
        OutCompositeOp,
        OverCompositeOp,
        OverlayCompositeOp,
        PegtopLightCompositeOp,
        PinLightCompositeOp,
        PlusCompositeOp,
        ReplaceCompositeOp,
        SaturateCompositeOp,
        ScreenCompositeOp,
        SoftLightCompositeOp,
        SrcAtopCompositeOp,
        SrcCompositeOp,
        SrcInCompositeOp,
        SrcOutCompositeOp,
        SrcOverCompositeOp,
        ThresholdCompositeOp,
        VividLightCompositeOp,
        XorCompositeOp,
    }

    CompressionType {
        UndefinedCompression,
        B44ACompression,
        B44Compression,
        BZipCompression,
        DXT1Compression,
        DXT3Compression,
        DXT5Compression,
        FaxCompression,
        Group4Compression,
        JBIG1Compression,
        JBIG2Compression,
        JPEG2000Compression,
        JPEGCompression,
        LosslessJPEGCompression,
        LZMACompression,
        LZWCompression,
        NoCompression,
        PizCompression,
        Pxr24Compression,
        RLECompression,
        ZipCompression,
        ZipSCompression,
        ZstdCompression,
        WebPCompression,
    }

    DecorationType {
        UndefinedDecoration,
        NoDecoration,
        UnderlineDecoration,
        OverlineDecoration,
        LineThroughDecoration,
    }

    DirectionType { UndefinedDirection, RightToLeftDirection, LeftToRightDirection }

    DisposeType {
        UnrecognizedDispose,
        UndefinedDispose,
        NoneDispose,
        BackgroundDispose,
        PreviousDispose,
    }

    DistortMethod {
        UndefinedDistortion,
        AffineDistortion,
        AffineProjectionDistortion,
        ScaleRotateTranslateDistortion,
        PerspectiveDistortion,
        PerspectiveProjectionDistortion,
        BilinearForwardDistortion,
        BilinearDistortion,
        BilinearReverseDistortion,
        PolynomialDistortion,
        ArcDistortion,
        PolarDistortion,
        DePolarDistortion,
        Cylinder2PlaneDistortion,
        Plane2CylinderDistortion,
        BarrelDistortion,
        BarrelInverseDistortion,
        ShepardsDistortion,
        ResizeDistortion,
        SentinelDistortion,
    }

    DitherMethod {
        UndefinedDitherMethod,
        NoDitherMethod,
        RiemersmaDitherMethod,
        FloydSteinbergDitherMethod,
    }

    EndianType { UndefinedEndian, LSBEndian, MSBEndian }

    ExceptionType {
        UndefinedException,
        WarningException,
        ResourceLimitWarning,
        TypeWarning,
        OptionWarning,
        DelegateWarning,
        MissingDelegateWarning,
        CorruptImageWarning,
        FileOpenWarning,
        BlobWarning,
        StreamWarning,
        CacheWarning,
        CoderWarning,
        FilterWarning,
        ModuleWarning,
        DrawWarning,
        ImageWarning,
        WandWarning,
        RandomWarning,
        XServerWarning,
        MonitorWarning,
        RegistryWarning,
        ConfigureWarning,
        PolicyWarning,
        ErrorException,
        ResourceLimitError,
        TypeError,
        OptionError,
        DelegateError,
        MissingDelegateError,
        CorruptImageError,
        FileOpenError,
        BlobError,
        StreamError,
        CacheError,
        CoderError,
        FilterError,
        ModuleError,
        DrawError,
        ImageError,
        WandError,
        RandomError,
        XServerError,
        MonitorError,
        RegistryError,
        ConfigureError,
        PolicyError,
        FatalErrorException,
        ResourceLimitFatalError,
        TypeFatalError,
        OptionFatalError,
        DelegateFatalError,
        MissingDelegateFatalError,
        CorruptImageFatalError,
        FileOpenFatalError,
        BlobFatalError,
        StreamFatalError,
        CacheFatalError,
        CoderFatalError,
        FilterFatalError,
        ModuleFatalError,
        DrawFatalError,
        ImageFatalError,
        WandFatalError,
        RandomFatalError,
        XServerFatalError,
        MonitorFatalError,
        RegistryFatalError,
        ConfigureFatalError,
        PolicyFatalError,
    }

    FillRule { UndefinedRule, EvenOddRule, NonZeroRule }

    FilterType {
        UndefinedFilter,
        PointFilter,
        BoxFilter,
        TriangleFilter,
        HermiteFilter,
        HannFilter,
        HammingFilter,
        BlackmanFilter,
        GaussianFilter,
        QuadraticFilter,
        CubicFilter,
        CatromFilter,
        MitchellFilter,
        JincFilter,
        SincFilter,
        SincFastFilter,
        KaiserFilter,
        WelchFilter,
        ParzenFilter,
        BohmanFilter,
        BartlettFilter,
        LagrangeFilter,
        LanczosFilter,
        LanczosSharpFilter,
        Lanczos2Filter,
        Lanczos2SharpFilter,
        RobidouxFilter,
        RobidouxSharpFilter,
        CosineFilter,
        SplineFilter,
        LanczosRadiusFilter,
        SentinelFilter,
    }

    GradientType { UndefinedGradient, LinearGradient, RadialGradient }

    GravityType {
        UndefinedGravity,
        ForgetGravity,
        NorthWestGravity,
        NorthGravity,
        NorthEastGravity,
        WestGravity,
        CenterGravity,
        EastGravity,
        SouthWestGravity,
        SouthGravity,
        SouthEastGravity,
    }

    ImageType {
        UndefinedType,
        BilevelType,
        GrayscaleType,
        GrayscaleAlphaType,
        PaletteType,
        PaletteAlphaType,
        TrueColorType,
        TrueColorAlphaType,
        ColorSeparationType,
        ColorSeparationAlphaType,
        OptimizeType,
        PaletteBilevelAlphaType,
    }

    InterlaceType {
        UndefinedInterlace,
        NoInterlace,
        LineInterlace,
        PlaneInterlace,
        PartitionInterlace,
        GIFInterlace,
        JPEGInterlace,
        PNGInterlace,
    }

    KernelInfoType {
        UndefinedKernel,
        UnityKernel,
        GaussianKernel,
        DoGKernel,
        LoGKernel,
        BlurKernel,
        CometKernel,
        BinomialKernel,
        LaplacianKernel,
        SobelKernel,
        FreiChenKernel,
        RobertsKernel,
        PrewittKernel,
        CompassKernel,
        KirschKernel,
        DiamondKernel,
        SquareKernel,
        RectangleKernel,
        OctagonKernel,
        DiskKernel,
        PlusKernel,
        CrossKernel,
        RingKernel,
        PeaksKernel,
        EdgesKernel,
        CornersKernel,
        DiagonalsKernel,
        LineEndsKernel,
        LineJunctionsKernel,
        RidgesKernel,
        ConvexHullKernel,
        ThinSEKernel,
        SkeletonKernel,
        ChebyshevKernel,
        ManhattanKernel,
        OctagonalKernel,
        EuclideanKernel,
        UserDefinedKernel,
    }

    LayerMethod {
        UndefinedLayer,
        CoalesceLayer,
        CompareAnyLayer,
        CompareClearLayer,
        CompareOverlayLayer,
        DisposeLayer,
        OptimizeLayer,
        OptimizeImageLayer,
        OptimizePlusLayer,
        OptimizeTransLayer,
        RemoveDupsLayer,
        RemoveZeroLayer,
        CompositeLayer,
        MergeLayer,
        FlattenLayer,
        MosaicLayer,
        TrimBoundsLayer,
    }

    LineCap { UndefinedCap, ButtCap, RoundCap, SquareCap }

    LineJoin { UndefinedJoin, MiterJoin, RoundJoin, BevelJoin }

    LogEventType {
        UndefinedEvents,
        NoEvents,
        AccelerateEvent,
        AnnotateEvent,
        BlobEvent,
        CacheEvent,
        CoderEvent,
        ConfigureEvent,
        DeprecateEvent,
        DrawEvent,
        ExceptionEvent,
        ImageEvent,
        LocaleEvent,
        ModuleEvent,
        PolicyEvent,
        ResourceEvent,
        TraceEvent,
        TransformEvent,
        UserEvent,
        WandEvent,
        X11Event,
        AllEvents,
    }

    MagickEvaluateOperator {
        UndefinedEvaluateOperator,
        AbsEvaluateOperator,
        AddEvaluateOperator,
        AddModulusEvaluateOperator,
        AndEvaluateOperator,
        CosineEvaluateOperator,
        DivideEvaluateOperator,
        ExponentialEvaluateOperator,
        GaussianNoiseEvaluateOperator,
        ImpulseNoiseEvaluateOperator,
        LaplacianNoiseEvaluateOperator,
        LeftShiftEvaluateOperator,
        LogEvaluateOperator,
        MaxEvaluateOperator,
        MeanEvaluateOperator,
        MedianEvaluateOperator,
        MinEvaluateOperator,
        MultiplicativeNoiseEvaluateOperator,
        MultiplyEvaluateOperator,
        OrEvaluateOperator,
        PoissonNoiseEvaluateOperator,
        PowEvaluateOperator,
        RightShiftEvaluateOperator,
        RootMeanSquareEvaluateOperator,
        SetEvaluateOperator,
        SineEvaluateOperator,
        SubtractEvaluateOperator,
        SumEvaluateOperator,
        ThresholdBlackEvaluateOperator,
        ThresholdEvaluateOperator,
        ThresholdWhiteEvaluateOperator,
        UniformNoiseEvaluateOperator,
        XorEvaluateOperator,
    }

    MagickFormatType { UndefinedFormatType, ImplicitFormatType, ExplicitFormatType }

    MagickFunction {
        UndefinedFunction,
        ArcsinFunction,
        ArctanFunction,
        PolynomialFunction,
        SinusoidFunction,
    }

    MapMode { ReadMode, WriteMode, IOMode, PersistMode }

    MetricType {
        UndefinedErrorMetric,
        AbsoluteErrorMetric,
        FuzzErrorMetric,
        MeanAbsoluteErrorMetric,
        MeanErrorPerPixelErrorMetric,
        MeanSquaredErrorMetric,
        NormalizedCrossCorrelationErrorMetric,
        PeakAbsoluteErrorMetric,
        PeakSignalToNoiseRatioErrorMetric,
        PerceptualHashErrorMetric,
        RootMeanSquaredErrorMetric,
        StructuralSimilarityErrorMetric,
        StructuralDissimilarityErrorMetric,
    }

    MontageMode { UndefinedMode, FrameMode, UnframeMode, ConcatenateMode }

    MorphologyMethod {
        UndefinedMorphology,
        ConvolveMorphology,
        CorrelateMorphology,
        ErodeMorphology,
        DilateMorphology,
        ErodeIntensityMorphology,
        DilateIntensityMorphology,
        IterativeDistanceMorphology,
        OpenMorphology,
        CloseMorphology,
        OpenIntensityMorphology,
        CloseIntensityMorphology,
        SmoothMorphology,
        EdgeInMorphology,
        EdgeOutMorphology,
        EdgeMorphology,
        TopHatMorphology,
        BottomHatMorphology,
        HitAndMissMorphology,
        ThinningMorphology,
        ThickenMorphology,
        DistanceMorphology,
        VoronoiMorphology,
    }

    NoiseType {
        UndefinedNoise,
        UniformNoise,
        GaussianNoise,
        MultiplicativeGaussianNoise,
        ImpulseNoise,
        LaplacianNoise,
        PoissonNoise,
        RandomNoise,
    }

    OrientationType {
        UndefinedOrientation,
        TopLeftOrientation,
        TopRightOrientation,
        BottomRightOrientation,
        BottomLeftOrientation,
        LeftTopOrientation,
        RightTopOrientation,
        RightBottomOrientation,
        LeftBottomOrientation,
    }

    PaintMethod {
        UndefinedMethod,
        PointMethod,
        ReplaceMethod,
        FloodfillMethod,
        FillToBorderMethod,
        ResetMethod,
    }

    PathType {
        UndefinedPath,
        MagickPath,
        RootPath,
        HeadPath,
        TailPath,
        BasePath,
        ExtensionPath,
        SubimagePath,
        CanonicalPath,
        SubcanonicalPath,
    }

    PixelIntensityMethod {
        UndefinedPixelIntensityMethod,
        AveragePixelIntensityMethod,
        BrightnessPixelIntensityMethod,
        LightnessPixelIntensityMethod,
        MSPixelIntensityMethod,
        Rec601LumaPixelIntensityMethod,
        Rec601LuminancePixelIntensityMethod,
        Rec709LumaPixelIntensityMethod,
        Rec709LuminancePixelIntensityMethod,
        RMSPixelIntensityMethod,
    }

    PixelInterpolateMethod {
        UndefinedInterpolatePixel,
        AverageInterpolatePixel,
        Average9InterpolatePixel,
        Average16InterpolatePixel,
        BackgroundInterpolatePixel,
        BilinearInterpolatePixel,
        BlendInterpolatePixel,
        CatromInterpolatePixel,
        IntegerInterpolatePixel,
        MeshInterpolatePixel,
        NearestInterpolatePixel,
        SplineInterpolatePixel,
    }

    PixelMask { UndefinedPixelMask, ReadPixelMask, WritePixelMask, CompositePixelMask }

    PolicyDomain {
        UndefinedPolicyDomain,
        CoderPolicyDomain,
        DelegatePolicyDomain,
        FilterPolicyDomain,
        PathPolicyDomain,
        ResourcePolicyDomain,
        SystemPolicyDomain,
        CachePolicyDomain,
        ModulePolicyDomain,
    }

    PolicyRights {
        UndefinedPolicyRights,
        NoPolicyRights,
        ReadPolicyRights,
        WritePolicyRights,
        ExecutePolicyRights,
        AllPolicyRights,
    }

    PreviewType {
        UndefinedPreview,
        RotatePreview,
        ShearPreview,
        RollPreview,
        HuePreview,
        SaturationPreview,
        BrightnessPreview,
        GammaPreview,
        SpiffPreview,
        DullPreview,
        GrayscalePreview,
        QuantizePreview,
        DespecklePreview,
        ReduceNoisePreview,
        AddNoisePreview,
        SharpenPreview,
        BlurPreview,
        ThresholdPreview,
        EdgeDetectPreview,
        SpreadPreview,
        SolarizePreview,
        ShadePreview,
        RaisePreview,
        SegmentPreview,
        SwirlPreview,
        ImplodePreview,
        WavePreview,
        OilPaintPreview,
        CharcoalDrawingPreview,
        JPEGPreview,
    }

    PrimitiveType {
        UndefinedPrimitive,
        AlphaPrimitive,
        ArcPrimitive,
        BezierPrimitive,
        CirclePrimitive,
        ColorPrimitive,
        EllipsePrimitive,
        ImagePrimitive,
        LinePrimitive,
        PathPrimitive,
        PointPrimitive,
        PolygonPrimitive,
        PolylinePrimitive,
        RectanglePrimitive,
        RoundRectanglePrimitive,
        TextPrimitive,
    }

    QuantumAlphaType { UndefinedQuantumAlpha, AssociatedQuantumAlpha, DisassociatedQuantumAlpha }

    QuantumFormatType {
        UndefinedQuantumFormat,
        FloatingPointQuantumFormat,
        SignedQuantumFormat,
        UnsignedQuantumFormat,
    }

    QuantumType {
        UndefinedQuantum,
        AlphaQuantum,
        BGRAQuantum,
        BGROQuantum,
        BGRQuantum,
        BlackQuantum,
        BlueQuantum,
        CbYCrAQuantum,
        CbYCrQuantum,
        CbYCrYQuantum,
        CMYKAQuantum,
        CMYKOQuantum,
        CMYKQuantum,
        CyanQuantum,
        GrayAlphaQuantum,
        GrayQuantum,
        GreenQuantum,
        IndexAlphaQuantum,
        IndexQuantum,
        MagentaQuantum,
        OpacityQuantum,
        RedQuantum,
        RGBAQuantum,
        RGBOQuantum,
        RGBPadQuantum,
        RGBQuantum,
        YellowQuantum,
    }

    ReferenceType { UndefinedReference, GradientReference }

    RegistryType {
        UndefinedRegistryType,
        ImageRegistryType,
        ImageInfoRegistryType,
        StringRegistryType,
    }

    RenderingIntent {
        UndefinedIntent,
        SaturationIntent,
        PerceptualIntent,
        AbsoluteIntent,
        RelativeIntent,
    }

    ResolutionType {
        UndefinedResolution,
        PixelsPerInchResolution,
        PixelsPerCentimeterResolution,
    }

    ResourceType {
        UndefinedResource,
        AreaResource,
        DiskResource,
        FileResource,
        HeightResource,
        MapResource,
        MemoryResource,
        ThreadResource,
        ThrottleResource,
        TimeResource,
        WidthResource,
        ListLengthResource,
    }

    SparseColorMethod {
        UndefinedColorInterpolate,
        BarycentricColorInterpolate,
        BilinearColorInterpolate,
        PolynomialColorInterpolate,
        ShepardsColorInterpolate,
        VoronoiColorInterpolate,
        InverseColorInterpolate,
        ManhattanColorInterpolate,
    }

    SpreadMethod { UndefinedSpread, PadSpread, ReflectSpread, RepeatSpread }

    StatisticType {
        UndefinedStatistic,
        GradientStatistic,
        MaximumStatistic,
        MeanStatistic,
        MedianStatistic,
        MinimumStatistic,
        ModeStatistic,
        NonpeakStatistic,
        RootMeanSquareStatistic,
        StandardDeviationStatistic,
    }

    StorageType {
        UndefinedPixel,
        CharPixel,
        DoublePixel,
        FloatPixel,
        LongPixel,
        QuantumPixel,
        ShortPixel,
    }

    StretchType {
        UndefinedStretch,
        NormalStretch,
        UltraCondensedStretch,
        ExtraCondensedStretch,
        CondensedStretch,
        SemiCondensedStretch,
        SemiExpandedStretch,
        ExpandedStretch,
        ExtraExpandedStretch,
        UltraExpandedStretch,
        AnyStretch,
    }

    StyleType {
        UndefinedStyle,
        NormalStyle,
        ItalicStyle,
        ObliqueStyle,
        AnyStyle,
        BoldStyle,
    }

    TimerState { UndefinedTimerState, StoppedTimerState, RunningTimerState }

    VirtualPixelMethod {
        UndefinedVirtualPixelMethod,
        BackgroundVirtualPixelMethod,
        DitherVirtualPixelMethod,
        EdgeVirtualPixelMethod,
        MirrorVirtualPixelMethod,
        RandomVirtualPixelMethod,
        TileVirtualPixelMethod,
        TransparentVirtualPixelMethod,
        MaskVirtualPixelMethod,
        BlackVirtualPixelMethod,
        GrayVirtualPixelMethod,
        WhiteVirtualPixelMethod,
        HorizontalTileVirtualPixelMethod,
        VerticalTileVirtualPixelMethod,
        HorizontalTileEdgeVirtualPixelMethod,
        VerticalTileEdgeVirtualPixelMethod,
        CheckerTileVirtualPixelMethod,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tables_match_bindings() {
        let lua = Lua::new();
        let module = lua.create_table().unwrap();
        install(&lua, &module).unwrap();

        for name in ENUMS {
            let table: LuaTable = module.get(*name).unwrap();
            assert!(table.pairs::<LuaString, i64>().count() > 0, "{name} is empty");
        }

        let gravity: LuaTable = module.get("GravityType").unwrap();
        assert_eq!(
            gravity.get::<u32>("CenterGravity").unwrap(),
            magick_sys::GravityType_CenterGravity
        );

        let storage: LuaTable = module.get("StorageType").unwrap();
        assert_eq!(
            storage.get::<u32>("DoublePixel").unwrap(),
            magick_sys::StorageType_DoublePixel
        );

        let options: LuaTable = module.get("CommandOption").unwrap();
        assert_eq!(options.get::<i64>("MagickUndefinedOptions").unwrap(), -1);

        let channels: LuaTable = module.get("ChannelType").unwrap();
        assert_eq!(
            channels.get::<u32>("CompositeMaskChannel").unwrap(),
            magick_sys::ChannelType_CompositeMaskChannel
        );
    }
}
