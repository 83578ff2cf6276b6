use rate_tracker::{BlendedRate, Role, RoleCatalog, blended_rate, total_cost};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn engineer_and_designer() -> RoleCatalog {
    let mut catalog = RoleCatalog::new();
    catalog.add_role(Role::new("Engineer", 50.0), 3.0);
    catalog.add_role(Role::new("Designer", 40.0), 2.0);
    catalog
}

#[test]
fn empty_catalog_has_zero_blended_rate() {
    let catalog = RoleCatalog::new();
    assert_eq!(
        blended_rate(&catalog),
        BlendedRate {
            rate: 0.0,
            total_quantity: 0.0
        }
    );
}

#[test]
fn registered_roles_without_headcount_have_zero_blended_rate() {
    let mut catalog = RoleCatalog::new();
    catalog.register_new_role("Engineer", 50.0).unwrap();
    let blended = blended_rate(&catalog);
    assert_eq!(blended.rate, 0.0);
    assert_eq!(blended.total_quantity, 0.0);
}

#[test]
fn single_role_blends_to_its_own_rate() {
    let mut catalog = RoleCatalog::new();
    catalog.add_role(Role::new("Analyst", 72.5), 4.0);
    let blended = blended_rate(&catalog);
    assert!(approx(blended.rate, 72.5));
    assert_eq!(blended.total_quantity, 4.0);
}

#[test]
fn two_roles_blend_to_weighted_mean() {
    let catalog = engineer_and_designer();
    let blended = blended_rate(&catalog);
    assert!(approx(blended.rate, 46.0), "got {}", blended.rate);
    assert_eq!(blended.total_quantity, 5.0);
}

#[test]
fn total_cost_scales_blended_rate_by_hours() {
    let catalog = engineer_and_designer();

    let ten = total_cost(&catalog, 10.0);
    assert!(approx(ten.cost, 460.0));
    assert_eq!(ten.total_quantity, 5.0);
    assert_eq!(ten.hours, 10.0);

    assert_eq!(total_cost(&catalog, 0.0).cost, 0.0);
    assert!(approx(total_cost(&catalog, 2.5).cost, 115.0));
    assert!(approx(total_cost(&catalog, -1.0).cost, -46.0));
}

#[test]
fn removed_role_no_longer_contributes() {
    let mut catalog = engineer_and_designer();
    catalog.remove_role("Engineer");
    let blended = blended_rate(&catalog);
    assert!(approx(blended.rate, 40.0));
    assert_eq!(blended.total_quantity, 2.0);
}

#[test]
fn rate_edit_is_reflected_on_next_computation() {
    let mut catalog = engineer_and_designer();
    catalog.update_role_rate("Designer", 65.0);
    // (50*3 + 65*2) / 5
    assert!(approx(blended_rate(&catalog).rate, 56.0));
}
