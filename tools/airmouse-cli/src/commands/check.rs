//! Check system capabilities.

use airmouse_common::config::AirmouseConfig;

pub fn run() -> anyhow::Result<()> {
    let config = AirmouseConfig::load();

    println!("Airmouse System Check");
    println!("{}", "=".repeat(50));

    // Camera device
    if config.camera.device.exists() {
        println!("[OK] Camera device: {:?}", config.camera.device);
    } else {
        println!(
            "[FAIL] Camera device {:?} not found (set camera.device or --device)",
            config.camera.device
        );
    }

    // Detector helper
    let helper = config
        .detector
        .helper
        .clone()
        .unwrap_or_else(|| "helpers/hand_landmarker.py".into());
    if helper.exists() {
        println!("[OK] Detector helper: {:?}", helper);
    } else {
        println!("[FAIL] Detector helper {:?} not found", helper);
    }

    // Python interpreter for the helper
    match std::process::Command::new("python3")
        .arg("--version")
        .output()
    {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout);
            println!("[OK] Python: {}", version.trim());
        }
        _ => println!("[FAIL] python3 not found on PATH"),
    }

    // Pointer backends
    println!("[OK] Pointer backend: enigo (desktop session)");
    #[cfg(target_os = "linux")]
    {
        if airmouse_pointer::UinputSink::is_supported() {
            println!("[OK] Pointer backend: uinput (/dev/uinput writable)");
        } else {
            println!("[WARN] Pointer backend: uinput unavailable (/dev/uinput not writable)");
        }
    }

    println!();
    println!(
        "Screen mapping target: {}x{}",
        config.screen.width, config.screen.height
    );
    println!(
        "Capture: {}x{} @ {} fps",
        config.camera.width, config.camera.height, config.camera.fps
    );

    Ok(())
}
