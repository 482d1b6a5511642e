//! Static reference tables served by the lookup endpoints
//!
//! The tables live for the whole process and are never mutated.

use crate::models::{DepartmentContact, LandPrice, MarketPrice};

const PER_SQUARE_FEET: &str = "per square feet";

pub static MARKET_DATA: [MarketPrice; 8] = [
    MarketPrice { name: "Tomato", price: 25.00 },
    MarketPrice { name: "Potato", price: 30.50 },
    MarketPrice { name: "Onion", price: 20.00 },
    MarketPrice { name: "Brinjal", price: 35.75 },
    MarketPrice { name: "Cabbage", price: 18.25 },
    MarketPrice { name: "Banana", price: 40.00 },
    MarketPrice { name: "Mango", price: 80.00 },
    MarketPrice { name: "Grapes", price: 65.00 },
];

pub static LAND_PRICE_DATA: [LandPrice; 3] = [
    LandPrice { location: "Guntur", price: 3500, unit: PER_SQUARE_FEET },
    LandPrice { location: "Vijayawada", price: 4200, unit: PER_SQUARE_FEET },
    LandPrice { location: "Amaravati", price: 5000, unit: PER_SQUARE_FEET },
];

pub static DEPARTMENT_NUMBERS: [DepartmentContact; 3] = [
    DepartmentContact {
        name: "Indian Council of Agricultural Research (ICAR)",
        phone: "+91-11-25841760",
    },
    DepartmentContact {
        name: "Department of Agriculture, Cooperation & Farmers Welfare",
        phone: "+91-11-23383087",
    },
    DepartmentContact {
        name: "National Bank for Agriculture and Rural Development (NABARD)",
        phone: "+91-22-26539895",
    },
];
