//! Human-readable labels for enum-coded EXIF tags.
//!
//! A handful of Exif sub-IFD tags store small integer codes whose
//! meaning is fixed by the EXIF specification. The orchestrator swaps
//! those codes for the label strings defined here. Tags without a
//! label table, and codes missing from their table, keep their raw
//! numeric value.

/// Label for an enum-coded tag value.
///
/// Returns `None` when `tag_name` has no enum table or `code` is not
/// defined for it.
pub fn enum_label(tag_name: &str, code: u32) -> Option<&'static str> {
    match tag_name {
        "ExposureProgram" => exposure_program(code),
        "MeteringMode" => metering_mode(code),
        "LightSource" => light_source(code),
        "Flash" => flash(code),
        "SensingMethod" => sensing_method(code),
        "SceneCaptureType" => scene_capture_type(code),
        "SceneType" => scene_type(code),
        "CustomRendered" => custom_rendered(code),
        "WhiteBalance" => white_balance(code),
        "GainControl" => gain_control(code),
        "Contrast" => contrast(code),
        "Saturation" => saturation(code),
        "Sharpness" => sharpness(code),
        "SubjectDistanceRange" => subject_distance_range(code),
        "FileSource" => file_source(code),
        _ => None,
    }
}

/// Label for one ComponentsConfiguration channel code.
pub fn component_label(code: u8) -> &'static str {
    match code {
        1 => "Y",
        2 => "Cb",
        3 => "Cr",
        4 => "R",
        5 => "G",
        6 => "B",
        _ => "",
    }
}

fn exposure_program(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Not defined"),
        1 => Some("Manual"),
        2 => Some("Normal program"),
        3 => Some("Aperture priority"),
        4 => Some("Shutter priority"),
        5 => Some("Creative program"),
        6 => Some("Action program"),
        7 => Some("Portrait mode"),
        8 => Some("Landscape mode"),
        _ => None,
    }
}

fn metering_mode(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Unknown"),
        1 => Some("Average"),
        2 => Some("CenterWeightedAverage"),
        3 => Some("Spot"),
        4 => Some("MultiSpot"),
        5 => Some("Pattern"),
        6 => Some("Partial"),
        255 => Some("Other"),
        _ => None,
    }
}

fn light_source(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Unknown"),
        1 => Some("Daylight"),
        2 => Some("Fluorescent"),
        3 => Some("Tungsten (incandescent light)"),
        4 => Some("Flash"),
        9 => Some("Fine weather"),
        10 => Some("Cloudy weather"),
        11 => Some("Shade"),
        12 => Some("Daylight fluorescent (D 5700 - 7100K)"),
        13 => Some("Day white fluorescent (N 4600 - 5400K)"),
        14 => Some("Cool white fluorescent (W 3900 - 4500K)"),
        15 => Some("White fluorescent (WW 3200 - 3700K)"),
        17 => Some("Standard light A"),
        18 => Some("Standard light B"),
        19 => Some("Standard light C"),
        20 => Some("D55"),
        21 => Some("D65"),
        22 => Some("D75"),
        23 => Some("D50"),
        24 => Some("ISO studio tungsten"),
        255 => Some("Other"),
        _ => None,
    }
}

fn flash(code: u32) -> Option<&'static str> {
    match code {
        0x0000 => Some("Flash did not fire"),
        0x0001 => Some("Flash fired"),
        0x0005 => Some("Strobe return light not detected"),
        0x0007 => Some("Strobe return light detected"),
        0x0009 => Some("Flash fired, compulsory flash mode"),
        0x000D => Some("Flash fired, compulsory flash mode, return light not detected"),
        0x000F => Some("Flash fired, compulsory flash mode, return light detected"),
        0x0010 => Some("Flash did not fire, compulsory flash mode"),
        0x0018 => Some("Flash did not fire, auto mode"),
        0x0019 => Some("Flash fired, auto mode"),
        0x001D => Some("Flash fired, auto mode, return light not detected"),
        0x001F => Some("Flash fired, auto mode, return light detected"),
        0x0020 => Some("No flash function"),
        0x0041 => Some("Flash fired, red-eye reduction mode"),
        0x0045 => Some("Flash fired, red-eye reduction mode, return light not detected"),
        0x0047 => Some("Flash fired, red-eye reduction mode, return light detected"),
        0x0049 => Some("Flash fired, compulsory flash mode, red-eye reduction mode"),
        0x004D => Some(
            "Flash fired, compulsory flash mode, red-eye reduction mode, return light not detected",
        ),
        0x004F => Some(
            "Flash fired, compulsory flash mode, red-eye reduction mode, return light detected",
        ),
        0x0059 => Some("Flash fired, auto mode, red-eye reduction mode"),
        0x005D => Some("Flash fired, auto mode, return light not detected, red-eye reduction mode"),
        0x005F => Some("Flash fired, auto mode, return light detected, red-eye reduction mode"),
        _ => None,
    }
}

fn sensing_method(code: u32) -> Option<&'static str> {
    match code {
        1 => Some("Not defined"),
        2 => Some("One-chip color area sensor"),
        3 => Some("Two-chip color area sensor"),
        4 => Some("Three-chip color area sensor"),
        5 => Some("Color sequential area sensor"),
        7 => Some("Trilinear sensor"),
        8 => Some("Color sequential linear sensor"),
        _ => None,
    }
}

fn scene_capture_type(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Standard"),
        1 => Some("Landscape"),
        2 => Some("Portrait"),
        3 => Some("Night scene"),
        _ => None,
    }
}

fn scene_type(code: u32) -> Option<&'static str> {
    match code {
        1 => Some("Directly photographed"),
        _ => None,
    }
}

fn custom_rendered(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Normal process"),
        1 => Some("Custom process"),
        _ => None,
    }
}

fn white_balance(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Auto white balance"),
        1 => Some("Manual white balance"),
        _ => None,
    }
}

fn gain_control(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("None"),
        1 => Some("Low gain up"),
        2 => Some("High gain up"),
        3 => Some("Low gain down"),
        4 => Some("High gain down"),
        _ => None,
    }
}

fn contrast(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Normal"),
        1 => Some("Soft"),
        2 => Some("Hard"),
        _ => None,
    }
}

fn saturation(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Normal"),
        1 => Some("Low saturation"),
        2 => Some("High saturation"),
        _ => None,
    }
}

fn sharpness(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Normal"),
        1 => Some("Soft"),
        2 => Some("Hard"),
        _ => None,
    }
}

fn subject_distance_range(code: u32) -> Option<&'static str> {
    match code {
        0 => Some("Unknown"),
        1 => Some("Macro"),
        2 => Some("Close view"),
        3 => Some("Distant view"),
        _ => None,
    }
}

fn file_source(code: u32) -> Option<&'static str> {
    match code {
        3 => Some("DSC"),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
