//! Builds a couple of features by hand and prints their readable dumps.

use vector_feature::{Coord, Feature, FieldType, Geometry, Schema};

fn main() {
    let schema = Schema::builder("towers")
        .field("name", FieldType::String)
        .field("height_m", FieldType::Real)
        .field("floors", FieldType::Integer)
        .build();

    let mut tower = Feature::new(&schema);
    tower.set_fid(1).expect("set id");
    tower.set_field_string(0, "Harbour Mast");
    tower.set_field_double(1, 187.5);
    tower.set_field_integer(2, 44);
    tower
        .set_geometry(Geometry::Point(Coord::new(-122.335, 47.608)))
        .expect("set geometry");

    // Field values coerce on the way out.
    let height = tower.field_index("HEIGHT_M").expect("field exists");
    println!("height as text:    {}", tower.field_as_string(height));
    println!("height as integer: {}", tower.field_as_integer(height));
    println!();

    print!("{}", tower.dump_string());

    // Clones share the schema but nothing else.
    let mut replica = tower.clone();
    replica.set_fid(2).expect("set id");
    replica.set_field_string(0, "Harbour Mast (copy)");
    print!("{}", replica.dump_string());

    println!("originals intact: {}", tower.field_as_string(0));
}
