use std::cmp::Ordering;
use std::env;
use std::process::Command;

// Backend families we can select, one per build
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    cfg_flag: &'static str,
    target_arch: &'static [&'static str],
    detected: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "avx2" => 0,
            "sse4_1" => 1,
            "neon" => 2,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all register families this crate has a backend for
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse4_1",
                cfg_flag: "sse",
                target_arch: &["x86", "x86_64"],
                detected: false,
            },
            CpuFeature {
                name: "avx2",
                cfg_flag: "avx2",
                target_arch: &["x86", "x86_64"],
                detected: false,
            },
            CpuFeature {
                name: "neon",
                cfg_flag: "neon",
                target_arch: &["aarch64"],
                detected: false,
            },
        ]
    }

    fn matches_arch(&self, arch: &str) -> bool {
        self.target_arch.contains(&arch)
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Feature detection trait to make implementations more modular
trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Features enabled at compile time (-C target-cpu / -C target-feature)
struct TargetFeatureDetector;
impl CpuFeatureDetector for TargetFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
        let enabled: Vec<&str> = enabled.split(',').collect();

        for feature in features.iter_mut() {
            let wanted = match feature.name {
                "sse4_1" => "sse4.1",
                other => other,
            };
            feature.detected |= enabled.contains(&wanted);
        }
    }

    fn is_applicable(&self) -> bool {
        true
    }
}

// Linux CPU feature detector
struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for feature in features.iter_mut() {
                feature.detected |= contents.contains(feature.name);
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS CPU feature detector
struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                match feature.name {
                    "avx2" => feature.detected |= contents.contains("hw.optional.avx2_0: 1"),
                    "sse4_1" => feature.detected |= contents.contains("hw.optional.sse4_1: 1"),
                    "neon" => feature.detected |= contents.contains("hw.optional.neon: 1"),
                    _ => {}
                }
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

// No windows detector for now, windows builds rely on CARGO_CFG_TARGET_FEATURE

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        // Get detectors for all supported platforms
        let detectors = Self::cpu_features_detectors();

        // Find the applicable detector and use it
        for detector in detectors {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    // LANEWISE_BACKEND=avx2|sse|neon|fallback forces a backend
    fn forced_backend(features: &[CpuFeature], arch: &str) -> Option<&'static str> {
        let requested = env::var("LANEWISE_BACKEND").ok()?;
        let requested = requested.trim().to_lowercase();

        if requested == "fallback" {
            return Some("fallback");
        }

        match features.iter().find(|f| f.cfg_flag == requested) {
            Some(feature) if feature.matches_arch(arch) => Some(feature.cfg_flag),
            Some(feature) => {
                println!(
                    "cargo:warning=LANEWISE_BACKEND={} is not available on {arch}, ignoring",
                    feature.cfg_flag
                );
                None
            }
            None => {
                println!("cargo:warning=unknown LANEWISE_BACKEND value `{requested}`, ignoring");
                None
            }
        }
    }

    fn apply(features: &mut [CpuFeature], arch: &str) {
        // Sort features by priority (highest first)
        features.sort();

        // Find and use the highest detected feature (if any)
        // if no feature is detected, use fallback implementation
        let cfg_flag = Self::forced_backend(features, arch).unwrap_or_else(|| {
            features
                .iter()
                .find(|cpu_feature| cpu_feature.detected && cpu_feature.matches_arch(arch))
                .map(|cpu_feature| cpu_feature.cfg_flag)
                .unwrap_or("fallback")
        });

        println!("applying: {cfg_flag}");

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LANEWISE_BACKEND");

    let mut features = CpuFeature::features();

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    let is_native_build = host == target;

    TargetFeatureDetector.detect_features(&mut features);

    // Only run CPU detection for native builds
    if is_native_build {
        PlatformDetector::detect_cpu_features(&mut features);
    }

    // NEON is part of the aarch64 baseline
    if arch == "aarch64" {
        for feature in features.iter_mut().filter(|f| f.name == "neon") {
            feature.detected = true;
        }
    }

    PlatformDetector::apply(&mut features, &arch);
}
