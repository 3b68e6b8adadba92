extern crate bezier_spline;

use bezier_spline::{edge_value, CurvePath, FillDirection, PathElement};

fn main() {

    let values = [0.2, 0.6, 0.4, 0.3, 0.2];
    let path = CurvePath::from_values(&values, 300.0, 100.0).unwrap();

    for direction in [FillDirection::Down, FillDirection::Up] {
        println!("{:?} fill, gradient from {:.2}", direction, edge_value(&values, direction));

        for element in path.fill(direction) {
            match element {
                PathElement::MoveTo(p) => println!("M {:.2} {:.2}", p.x, p.y),
                PathElement::LineTo(p) => println!("L {:.2} {:.2}", p.x, p.y),
                PathElement::CurveTo(c1, c2, p) => println!(
                    "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                    c1.x, c1.y, c2.x, c2.y, p.x, p.y
                ),
                PathElement::ClosePath => println!("Z"),
            }
        }
    }
}
