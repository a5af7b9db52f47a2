// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The builtin photonics catalog fixture -- laser and terahertz systems.
//!
//! Definition order is load-bearing: the relevance scorer's stable sort
//! breaks score ties by catalog position.

use crate::record::{ProductKind, ProductRecord};

/// Template with every optional characteristic unset.
const UNSET: ProductRecord = ProductRecord {
    id: "",
    name: "",
    category: "",
    kind: ProductKind::Laser,
    wavelengths_nm: &[],
    wavelength_range_nm: None,
    power_range_mw: None,
    pulse_length_ns: None,
    pulse_duration_fs: None,
    modulation_mhz: None,
    frequency_range_thz: None,
    tunable: false,
    applications: &[],
    key_features: &[],
    named_models: &[],
    keywords: &[],
};

/// The full catalog, in definition order.
pub static PHOTONICS_CATALOG: &[ProductRecord] = &[
    // --- Single frequency lasers ---
    ProductRecord {
        id: "cobolt-04-01",
        name: "Cobolt 04-01 Series",
        category: "Single Frequency CW DPSS Lasers",
        kind: ProductKind::Laser,
        wavelengths_nm: &[457, 473, 491, 514, 532, 561, 594, 660, 1064],
        power_range_mw: Some((25, 450)),
        named_models: &[
            "Cobolt Twist (457 nm)",
            "Cobolt Blues (473 nm)",
            "Cobolt Calypso (491 nm)",
            "Cobolt Fandango (514 nm)",
            "Cobolt Samba (532 nm)",
            "Cobolt Jive (561 nm)",
            "Cobolt Mambo (594 nm)",
            "Cobolt Flamenco (660 nm)",
            "Cobolt Rumba (1064 nm)",
        ],
        applications: &[
            "Fluorescence Microscopy",
            "Raman Spectroscopy",
            "Holography",
            "Interferometry",
            "Flow Cytometry",
        ],
        key_features: &[
            "Single longitudinal mode (SLM)",
            "HTCure hermetically sealed",
            "Long coherence length",
            "Ultra-robust package",
        ],
        keywords: &["dpss", "cw", "continuous wave", "single frequency", "cobolt"],
        ..UNSET
    },
    ProductRecord {
        id: "cobolt-05-01",
        name: "Cobolt 05-01 Series",
        category: "High-Power Single Frequency CW DPSS Lasers",
        kind: ProductKind::Laser,
        wavelengths_nm: &[320, 349, 355, 457, 473, 491, 515, 532, 561, 640, 660, 1064],
        power_range_mw: Some((20, 3000)),
        named_models: &[
            "Cobolt Kizomba (349 nm)",
            "Cobolt Zydeco (355 nm)",
            "Cobolt Samba (532 nm, up to 1.5 W)",
            "Cobolt Jive (561 nm, up to 1 W)",
            "Cobolt Bolero (640 nm)",
            "Cobolt Rumba (1064 nm, up to 3 W)",
        ],
        applications: &[
            "Raman Spectroscopy",
            "Interferometry",
            "Holography",
            "Super-Resolution Microscopy",
            "Optical Tweezers",
            "Flow Cytometry",
            "DNA Sequencing",
            "Fluorescence Microscopy",
        ],
        key_features: &[
            "Up to 3 W output power",
            "Spectral purity > 60 dB",
            "Perfect TEM00 beam",
            "HTCure sealed design",
            "UV to NIR coverage",
        ],
        keywords: &["dpss", "high power", "single frequency", "cw", "uv", "cobolt"],
        ..UNSET
    },
    // --- Diode lasers ---
    ProductRecord {
        id: "cobolt-06-01",
        name: "Cobolt 06-01 Series",
        category: "Modulated CW Diode Lasers",
        kind: ProductKind::Laser,
        wavelengths_nm: &[
            375, 395, 405, 415, 425, 445, 457, 473, 488, 505, 515, 520, 532, 553, 561, 633, 638,
            647, 660, 685, 690, 705, 730, 760, 785, 808, 830, 940, 975,
        ],
        power_range_mw: Some((25, 400)),
        modulation_mhz: Some(150),
        applications: &[
            "Confocal Microscopy",
            "Flow Cytometry",
            "DNA Sequencing",
            "Spinning Disc Microscopy",
            "TIRF Microscopy",
            "Optogenetics",
        ],
        key_features: &[
            "25+ wavelengths available",
            "Digital modulation DC to 150 MHz",
            "True OFF capability",
            "Plug-and-play with USB/RS-232",
            "Integrated clean-up filters",
        ],
        keywords: &[
            "diode",
            "modulated",
            "fast switching",
            "mld",
            "dpl",
            "06-01",
            "multi-color",
        ],
        ..UNSET
    },
    // --- Narrow linewidth lasers ---
    ProductRecord {
        id: "cobolt-08-01",
        name: "Cobolt 08-01 Series",
        category: "Narrow Linewidth CW Lasers",
        kind: ProductKind::Laser,
        wavelengths_nm: &[405, 457, 473, 488, 515, 532, 561, 633, 660, 785, 1064],
        power_range_mw: Some((40, 500)),
        named_models: &[
            "Cobolt Disco (785 nm, < 100 kHz)",
            "08-DPL (488/532 nm, > 80 dB purity)",
            "08-NLD (633 nm, integrated isolator)",
        ],
        applications: &[
            "Raman Spectroscopy",
            "Interferometry",
            "Metrology",
            "Semiconductor Inspection",
        ],
        key_features: &[
            "Linewidth < 100 kHz",
            "Spectral purity > 70 dB",
            "No ASE background",
            "Integrated isolator (NLD models)",
            "Immune to optical feedback",
        ],
        keywords: &[
            "narrow linewidth",
            "08-dpl",
            "08-nld",
            "disco",
            "raman",
            "high purity",
        ],
        ..UNSET
    },
    // --- Nanosecond pulsed lasers ---
    ProductRecord {
        id: "cobolt-tor",
        name: "Cobolt Tor Series",
        category: "Q-Switched Nanosecond Pulsed Lasers",
        kind: ProductKind::Laser,
        wavelengths_nm: &[355, 532, 1064],
        power_range_mw: Some((100, 1000)),
        pulse_length_ns: Some((1, 5)),
        applications: &[
            "Photoacoustic Microscopy",
            "Marking",
            "LIDAR",
            "LIBS (Laser-Induced Breakdown Spectroscopy)",
        ],
        key_features: &[
            "Passively Q-switched",
            "1-5 ns pulse length",
            "Up to 500 uJ/pulse",
            "Compact ring-cavity design",
            "Low jitter, high stability",
        ],
        keywords: &[
            "pulsed",
            "nanosecond",
            "q-switched",
            "ns",
            "lidar",
            "libs",
            "marking",
        ],
        ..UNSET
    },
    // --- Tunable lasers ---
    ProductRecord {
        id: "c-wave",
        name: "C-WAVE Series",
        category: "Widely Tunable CW OPO Lasers",
        kind: ProductKind::Laser,
        wavelength_range_nm: Some((450, 3400)),
        power_range_mw: Some((80, 4000)),
        tunable: true,
        applications: &[
            "Quantum Optics",
            "Atomic Physics",
            "Spectroscopy",
            "Nanophotonics",
            "Holography",
            "Interferometry",
            "Metrology",
        ],
        key_features: &[
            "450 nm to 3.4 um continuous tuning",
            "Mode-hop-free operation",
            "Narrow linewidth < 1 MHz",
            "Multiple pump laser options",
            "AbsoluteLambda wavelength stabilization",
        ],
        keywords: &["tunable", "opo", "quantum", "atom", "c-wave"],
        ..UNSET
    },
    ProductRecord {
        id: "cobolt-qu-t",
        name: "Cobolt Qu-T Series",
        category: "Tunable & Lockable CW Lasers",
        kind: ProductKind::Laser,
        wavelength_range_nm: Some((530, 850)),
        power_range_mw: Some((100, 500)),
        tunable: true,
        applications: &["Quantum Optics", "Atomic Physics", "Spectroscopy"],
        key_features: &[
            "Tunable AND lockable",
            "530-850 nm range",
            "Perfect TEM00 beam",
            "Mode-hop-free tuning",
        ],
        keywords: &["tunable", "lockable", "quantum", "atom trapping", "qu-t"],
        ..UNSET
    },
    ProductRecord {
        id: "cobolt-odin",
        name: "Cobolt Odin Series",
        category: "Mid-IR Tunable Pulsed Lasers",
        kind: ProductKind::Laser,
        wavelength_range_nm: Some((3000, 4600)),
        power_range_mw: Some((1, 80)),
        tunable: true,
        applications: &[
            "Gas Analysis",
            "Mid-IR Spectroscopy",
            "Environmental Monitoring",
        ],
        key_features: &[
            "3-4.6 um mid-infrared",
            "Wavelength-selectable",
            "Compact design",
            "High repetition rate",
        ],
        keywords: &["mid-ir", "infrared", "gas analysis", "odin"],
        ..UNSET
    },
    // --- Laser combiners ---
    ProductRecord {
        id: "c-flex",
        name: "C-FLEX Laser Combiner",
        category: "Multi-Wavelength Laser Combiners",
        kind: ProductKind::Laser,
        power_range_mw: Some((25, 1000)),
        applications: &[
            "Confocal Microscopy",
            "Super-Resolution Imaging",
            "Flow Cytometry",
            "Optogenetics",
        ],
        key_features: &[
            "Up to 8 laser lines combined",
            "Single collinear output",
            "Mix diode + DPSS technology",
            "32 wavelengths available",
            "Fully customizable",
        ],
        keywords: &["combiner", "multi-line", "multi-color", "c-flex", "multiline"],
        ..UNSET
    },
    // --- Femtosecond lasers ---
    ProductRecord {
        id: "valo",
        name: "VALO Femtosecond Series",
        category: "Ultrafast Fiber Lasers",
        kind: ProductKind::Laser,
        wavelength_range_nm: Some((1000, 1100)),
        power_range_mw: Some((500, 3000)),
        pulse_duration_fs: Some(40),
        applications: &[
            "Multiphoton Microscopy",
            "Nonlinear Imaging",
            "Two-Photon Excitation",
            "SHG Imaging",
        ],
        key_features: &[
            "< 40 fs pulse duration",
            "Peak power > 2 MW",
            "Turn-key operation",
            "Compact fiber laser design",
        ],
        keywords: &[
            "femtosecond",
            "ultrafast",
            "fs",
            "multiphoton",
            "two-photon",
            "valo",
        ],
        ..UNSET
    },
    // --- Fiber lasers / amplifiers ---
    ProductRecord {
        id: "ampheia",
        name: "Ampheia Fiber Laser Systems",
        category: "High-Power CW Fiber Amplifiers",
        kind: ProductKind::Laser,
        wavelengths_nm: &[488, 515, 532, 976, 1015, 1030, 1064],
        power_range_mw: Some((5000, 50000)),
        applications: &[
            "Quantum Optics",
            "Atomic Physics",
            "Atom Cooling & Trapping",
            "Laser Doppler Velocimetry",
            "Holography",
            "Metrology",
            "Semiconductor Inspection",
        ],
        key_features: &[
            "Up to 50 W output power",
            "Ultra-low RIN",
            "Single-frequency single-mode",
            "Integrated seed laser",
            "Outstanding pointing stability",
        ],
        keywords: &["fiber", "amplifier", "high power", "ampheia", "watt"],
        ..UNSET
    },
    // --- Terahertz systems ---
    ProductRecord {
        id: "t-spectralyzer",
        name: "T-SPECTRALYZER",
        category: "THz Time-Domain Spectrometers",
        kind: ProductKind::Terahertz,
        frequency_range_thz: Some((0.1, 4.0)),
        applications: &[
            "THz Spectroscopy",
            "Non-Destructive Testing",
            "Chemical Identification",
            "Material Characterization",
            "Quality Control",
            "Layer Thickness Measurement",
        ],
        key_features: &[
            "0.1-4 THz range",
            "Dynamic range > 70 dB",
            "Plug & play fiber-based",
            "T/R/F measurement geometries",
            "Fully automated",
            "Contact-free, non-destructive",
        ],
        keywords: &["terahertz", "thz", "spectrometer", "spectroscopy", "ndt"],
        ..UNSET
    },
    ProductRecord {
        id: "t-spectralyzer-f",
        name: "T-SPECTRALYZER F",
        category: "Compact Fiber-Based THz Spectrometers",
        kind: ProductKind::Terahertz,
        frequency_range_thz: Some((0.1, 2.5)),
        applications: &[
            "THz Spectroscopy",
            "Non-Destructive Testing",
            "In-Line Process Monitoring",
            "Quality Control",
        ],
        key_features: &[
            "Compact 19-inch rack format",
            "0.1-2.5 THz range",
            "Fast scan (0.05-5 s)",
            "Fiber-coupled modules",
            "Industrial integration ready",
        ],
        keywords: &[
            "terahertz",
            "thz",
            "compact",
            "inline",
            "process monitoring",
            "rack",
        ],
        ..UNSET
    },
    ProductRecord {
        id: "t-cognition",
        name: "T-COGNITION",
        category: "Security THz Spectrometers",
        kind: ProductKind::Terahertz,
        frequency_range_thz: Some((0.1, 4.0)),
        applications: &[
            "Security Screening",
            "Drug Detection",
            "Explosives Detection",
            "Mail & Package Inspection",
            "Customs Inspection",
        ],
        key_features: &[
            "Spectroscopic fingerprint identification",
            "Internal substance database",
            "Non-invasive (no opening required)",
            "Instant identification",
            "DIN C4 envelope capacity",
        ],
        keywords: &["security", "screening", "detection"],
        ..UNSET
    },
    ProductRecord {
        id: "t-sense",
        name: "T-SENSE",
        category: "THz Mail & Package Imagers",
        kind: ProductKind::Terahertz,
        applications: &["Mail Screening", "Security Scanning", "Package Inspection"],
        key_features: &[
            "Radiation-free (no X-rays)",
            "Up to 3,000 envelopes/hour",
            "Dual-filter display",
            "Mobile and flexible",
            "Scalable from office to postal center",
        ],
        keywords: &["security", "mail", "screening", "xray-free"],
        ..UNSET
    },
    ProductRecord {
        id: "t-sense-fmi",
        name: "T-SENSE FMI",
        category: "THz Industrial Imaging Systems",
        kind: ProductKind::Terahertz,
        applications: &[
            "Industrial Quality Control",
            "Foreign Body Detection",
            "Flaw & Defect Detection",
            "Zero-Defect Production",
            "Non-Destructive Testing",
        ],
        key_features: &[
            "Non-destructive imaging",
            "Amplitude AND phase analysis",
            "No ionizing radiation",
            "Touchscreen control",
            "Adaptable for zero-defect production",
        ],
        keywords: &["quality control", "ndt", "imaging", "defect", "production"],
        ..UNSET
    },
];
