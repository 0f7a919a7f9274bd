//! Builder: the same construction steps produce either a car or its manual.
//!
//! `Director` knows the recipes; it drives any [`Builder`] without knowing
//! which product comes out at the end.

use std::fmt;

use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub horsepower: u32,
}

impl Engine {
    pub const DEFAULT: Engine = Engine { horsepower: 150 };
    pub const SPORTS: Engine = Engine { horsepower: 800 };
}

impl Default for Engine {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripComputer {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gps {
    pub model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    pub seats: Option<u8>,
    pub engine: Option<Engine>,
    pub trip_computer: Option<TripComputer>,
    pub gps: Option<Gps>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarManual {
    seats: u8,
    engine: Option<Engine>,
    trip_computer: Option<TripComputer>,
    gps: Option<Gps>,
}

impl CarManual {
    pub fn info(&self) -> String {
        let engine = match &self.engine {
            Some(engine) => format!("Horsepower: {}", engine.horsepower),
            None => "No engine".to_string(),
        };
        let trip_computer = match &self.trip_computer {
            Some(tc) => format!("Trip computer: {}", tc.name),
            None => "No trip computer".to_string(),
        };
        let gps = match &self.gps {
            Some(gps) => format!("GPS: {}", gps.model),
            None => "No GPS".to_string(),
        };
        [format!("Seats: {}", self.seats), engine, trip_computer, gps]
            .iter()
            .join("\n")
    }
}

impl fmt::Display for CarManual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

pub trait Builder {
    type Product;

    fn reset(&mut self);
    fn set_seats(&mut self, seats: u8);
    fn set_engine(&mut self, engine: Engine);
    /// `None` removes the trip computer.
    fn set_trip_computer(&mut self, name: Option<&str>);
    /// `None` removes the GPS.
    fn set_gps(&mut self, model: Option<&str>);
    /// Hand over the product and start a fresh one.
    fn get_result(&mut self) -> Self::Product;
}

#[derive(Debug, Default)]
pub struct CarBuilder {
    car: Car,
}

impl Builder for CarBuilder {
    type Product = Car;

    fn reset(&mut self) {
        self.car = Car::default();
    }

    fn set_seats(&mut self, seats: u8) {
        self.car.seats = Some(seats);
    }

    fn set_engine(&mut self, engine: Engine) {
        self.car.engine = Some(engine);
    }

    fn set_trip_computer(&mut self, name: Option<&str>) {
        self.car.trip_computer = name.map(|name| TripComputer { name: name.to_string() });
    }

    fn set_gps(&mut self, model: Option<&str>) {
        self.car.gps = model.map(|model| Gps { model: model.to_string() });
    }

    fn get_result(&mut self) -> Car {
        std::mem::take(&mut self.car)
    }
}

#[derive(Debug, Default)]
pub struct CarManualBuilder {
    manual: CarManual,
}

impl Builder for CarManualBuilder {
    type Product = CarManual;

    fn reset(&mut self) {
        self.manual = CarManual::default();
    }

    fn set_seats(&mut self, seats: u8) {
        self.manual.seats = seats;
    }

    fn set_engine(&mut self, engine: Engine) {
        self.manual.engine = Some(engine);
    }

    fn set_trip_computer(&mut self, name: Option<&str>) {
        self.manual.trip_computer = name.map(|name| TripComputer { name: name.to_string() });
    }

    fn set_gps(&mut self, model: Option<&str>) {
        self.manual.gps = model.map(|model| Gps { model: model.to_string() });
    }

    fn get_result(&mut self) -> CarManual {
        std::mem::take(&mut self.manual)
    }
}

#[derive(Debug, Default)]
pub struct Director;

impl Director {
    pub fn construct_sports_car<B: Builder>(&self, builder: &mut B) {
        builder.reset();
        builder.set_seats(2);
        builder.set_engine(Engine::SPORTS);
        builder.set_trip_computer(Some("unknown"));
        builder.set_gps(Some("unknown"));
    }

    pub fn construct_city_car<B: Builder>(&self, builder: &mut B) {
        builder.reset();
        builder.set_seats(4);
        builder.set_engine(Engine::DEFAULT);
        builder.set_trip_computer(None);
        builder.set_gps(Some("CityNav"));
    }
}

pub fn make_car() -> (Car, CarManual) {
    let director = Director;

    let mut car_builder = CarBuilder::default();
    director.construct_sports_car(&mut car_builder);
    let car = car_builder.get_result();

    let mut manual_builder = CarManualBuilder::default();
    director.construct_sports_car(&mut manual_builder);
    let manual = manual_builder.get_result();

    (car, manual)
}

pub fn demo() -> Vec<String> {
    let (car, manual) = make_car();
    let mut lines = vec![format!("{car:?}")];
    lines.extend(manual.info().lines().map(str::to_string));
    lines
}
