// Pattern 3: Builder Pattern - Director-Driven and Fluent Construction
// Separates how a car is assembled from which parts go into it, so the same
// construction process yields different representations.

use colored::Colorize;
use thiserror::Error;

// ============================================================================
// Parts and product
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Wheel {
    size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Engine {
    horsepower: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Body {
    shape: String,
}

#[derive(Debug)]
struct Car {
    body: Body,
    engine: Engine,
    wheels: [Wheel; 4],
}

impl Car {
    fn specifications(&self) {
        println!("body: {}", self.body.shape);
        println!("engine horsepower: {}", self.engine.horsepower);
        println!("tire size: {}'", self.wheels[0].size);
    }
}

// ============================================================================
// Part builders and the director
// ============================================================================

trait CarBuilder {
    fn wheel(&self) -> Wheel;
    fn engine(&self) -> Engine;
    fn body(&self) -> Body;
}

struct JeepBuilder;

impl CarBuilder for JeepBuilder {
    fn wheel(&self) -> Wheel {
        Wheel { size: 22 }
    }

    fn engine(&self) -> Engine {
        Engine { horsepower: 400 }
    }

    fn body(&self) -> Body {
        Body {
            shape: "SUV".to_string(),
        }
    }
}

struct NissanBuilder;

impl CarBuilder for NissanBuilder {
    fn wheel(&self) -> Wheel {
        Wheel { size: 16 }
    }

    fn engine(&self) -> Engine {
        Engine { horsepower: 85 }
    }

    fn body(&self) -> Body {
        Body {
            shape: "hatchback".to_string(),
        }
    }
}

/// Owns the construction process: one body, one engine, four wheels, in
/// that order, regardless of which builder supplies the parts.
struct Director;

impl Director {
    fn assemble(builder: &dyn CarBuilder) -> Car {
        Car {
            body: builder.body(),
            engine: builder.engine(),
            wheels: [
                builder.wheel(),
                builder.wheel(),
                builder.wheel(),
                builder.wheel(),
            ],
        }
    }
}

// ============================================================================
// Fluent consuming builder with validation
// ============================================================================

#[derive(Error, Debug, PartialEq)]
enum BuildError {
    #[error("a car needs a body shape")]
    MissingBody,
    #[error("a car needs an engine")]
    MissingEngine,
}

#[derive(Default)]
struct CustomCarBuilder {
    body: Option<Body>,
    engine: Option<Engine>,
    wheel_size: u32,
}

impl CustomCarBuilder {
    fn new() -> Self {
        Self {
            wheel_size: 17,
            ..Self::default()
        }
    }

    fn body(mut self, shape: impl Into<String>) -> Self {
        self.body = Some(Body {
            shape: shape.into(),
        });
        self
    }

    fn engine(mut self, horsepower: u32) -> Self {
        self.engine = Some(Engine { horsepower });
        self
    }

    fn wheel_size(mut self, size: u32) -> Self {
        self.wheel_size = size;
        self
    }

    // build() returns Result to enforce the required parts.
    fn build(self) -> Result<Car, BuildError> {
        let body = self.body.ok_or(BuildError::MissingBody)?;
        let engine = self.engine.ok_or(BuildError::MissingEngine)?;
        let wheel = Wheel {
            size: self.wheel_size,
        };

        Ok(Car {
            body,
            engine,
            wheels: [wheel; 4],
        })
    }
}

fn main() {
    println!("{}", "Pattern 3: Builder Pattern".bold());
    println!("==========================\n");

    println!("{}", "=== Jeep ===".green());
    let jeep = Director::assemble(&JeepBuilder);
    jeep.specifications();

    println!("\n{}", "=== Nissan ===".green());
    let nissan = Director::assemble(&NissanBuilder);
    nissan.specifications();

    println!("\n{}", "=== Fluent custom build ===".green());
    match CustomCarBuilder::new()
        .body("roadster")
        .engine(310)
        .wheel_size(19)
        .build()
    {
        Ok(car) => car.specifications(),
        Err(err) => println!("{} {}", "build failed:".red(), err),
    }

    println!("\n{}", "=== Missing engine ===".green());
    match CustomCarBuilder::new().body("roadster").build() {
        Ok(car) => car.specifications(),
        Err(err) => println!("{} {}", "build failed:".red(), err),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn director_assembles_jeep_parts() {
        let car = Director::assemble(&JeepBuilder);
        assert_eq!(car.body.shape, "SUV");
        assert_eq!(car.engine.horsepower, 400);
        assert!(car.wheels.iter().all(|w| w.size == 22));
        assert_eq!(car.wheels.len(), 4);
    }

    #[test]
    fn director_assembles_nissan_parts() {
        let car = Director::assemble(&NissanBuilder);
        assert_eq!(car.body.shape, "hatchback");
        assert_eq!(car.engine.horsepower, 85);
        assert!(car.wheels.iter().all(|w| w.size == 16));
    }

    #[test]
    fn same_process_different_representation() {
        let jeep = Director::assemble(&JeepBuilder);
        let nissan = Director::assemble(&NissanBuilder);
        assert_ne!(jeep.body, nissan.body);
        assert_ne!(jeep.engine, nissan.engine);
    }

    #[test]
    fn fluent_builder_applies_parts() {
        let car = CustomCarBuilder::new()
            .body("coupe")
            .engine(200)
            .wheel_size(18)
            .build()
            .unwrap();

        assert_eq!(car.body.shape, "coupe");
        assert_eq!(car.engine.horsepower, 200);
        assert!(car.wheels.iter().all(|w| w.size == 18));
    }

    #[test]
    fn fluent_builder_defaults_wheel_size() {
        let car = CustomCarBuilder::new()
            .body("coupe")
            .engine(200)
            .build()
            .unwrap();
        assert_eq!(car.wheels[0].size, 17);
    }

    #[test]
    fn fluent_builder_rejects_missing_parts() {
        assert_eq!(
            CustomCarBuilder::new().engine(200).build().unwrap_err(),
            BuildError::MissingBody
        );
        assert_eq!(
            CustomCarBuilder::new().body("coupe").build().unwrap_err(),
            BuildError::MissingEngine
        );
    }
}
