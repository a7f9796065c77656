use rust_decimal::Decimal;
use vehicle_records::VehicleRecord;

fn honda_dio() -> VehicleRecord {
    VehicleRecord::new("Honda", "Dio", 2022, Decimal::ZERO, Decimal::from(100000), "Black")
}

fn honda_dio_two_wheels() -> VehicleRecord {
    VehicleRecord::extended("Honda", "Dio", 2022, Decimal::ZERO, Decimal::from(100000), "Black", 2)
}

#[test]
fn test_render_lists_fields_in_fixed_order() {
    let record = VehicleRecord::new(
        "Yamaha",
        "Fascino",
        2019,
        Decimal::new(125005, 1),
        Decimal::from(78000),
        "Blue",
    );

    let rendered = record.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Brand:Yamaha",
            "Model:Fascino",
            "Year:2019",
            "Odometer:12500.5",
            "Price:78000",
            "Color:Blue",
        ]
    );
}

#[test]
fn test_extended_render_appends_wheel_count() {
    let base = honda_dio();
    let extended = honda_dio_two_wheels();

    let expected = format!("{}\nWheel count:2", base.render());
    assert_eq!(extended.render(), expected);
}

#[test]
fn test_price_increase_scenario() {
    let mut record = honda_dio();
    record.increase_price(Decimal::from(20000));

    assert_eq!(record.price(), Decimal::from(120000));
    let rendered = record.render();
    assert!(rendered.contains("Price:120000"));
    assert!(rendered.contains("Color:Black"));
}

#[test]
fn test_extended_scenario_contains_wheel_count() {
    let mut record = honda_dio_two_wheels();
    record.increase_price(Decimal::from(20000));

    let rendered = record.render();
    assert!(rendered.contains("Price:120000"));
    assert!(rendered.contains("Wheel count:2"));
}

#[test]
fn test_price_increases_compose_additively() {
    let a = Decimal::from(1500);
    let b = Decimal::from(-300);

    let mut first = honda_dio();
    first.increase_price(a);
    first.increase_price(b);

    let mut second = honda_dio();
    second.increase_price(b);
    second.increase_price(a);

    assert_eq!(first.price(), Decimal::from(100000) + a + b);
    assert_eq!(first.price(), second.price());
}

#[test]
fn test_set_color_changes_only_color() {
    let mut record = honda_dio_two_wheels();
    let before = record.render();

    record.set_color("Red");

    let after = record.render();
    assert!(after.contains("Color:Red"));
    assert!(!after.contains("Color:Black"));
    assert_eq!(
        before.replace("Color:Black", "Color:Red"),
        after
    );
}

#[test]
fn test_render_is_idempotent() {
    let record = honda_dio_two_wheels();
    assert_eq!(record.render(), record.render());
}
