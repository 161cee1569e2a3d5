use showcase_xr::assets;

#[test]
fn world_bundle_parses_into_named_models() {
    let models = pollster::block_on(assets::load_world("showcase_scene.obj")).unwrap();

    let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
    assert!(names.contains(&"PlaneFloor01"));
    assert!(names.contains(&"CowBoy01"));
    assert!(names.contains(&"CowBoy02"));
    assert!(names.contains(&"Crate01"));

    for model in &models {
        assert!(!model.positions.is_empty());
        assert!(!model.indices.is_empty());
    }
}

#[test]
fn missing_bundle_surfaces_an_error() {
    let result = pollster::block_on(assets::load_world("no_such_bundle.obj"));
    assert!(result.is_err());
}
