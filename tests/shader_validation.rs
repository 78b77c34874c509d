//! Validates the render shader with naga, so a WGSL typo fails in CI
//! instead of at first launch.

use murmur::SHADER_SOURCE;

fn validate_wgsl(source: &str) -> Result<(), String> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| format!("WGSL parse error: {:?}", e))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {:?}", e))?;

    Ok(())
}

#[test]
fn render_shader_is_valid_wgsl() {
    if let Err(e) = validate_wgsl(SHADER_SOURCE) {
        panic!("{}", e);
    }
}

#[test]
fn render_shader_declares_both_entry_points() {
    let module = naga::front::wgsl::parse_str(SHADER_SOURCE).expect("shader should parse");
    let names: Vec<&str> = module
        .entry_points
        .iter()
        .map(|ep| ep.name.as_str())
        .collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}
