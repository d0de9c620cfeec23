use serde::{Deserialize, Serialize};

pub const UNIVERSE_SIZE: usize = 81;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Value {
    One,
    Two,
    Three,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Purple,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Shape {
    Diamond,
    Flag,
    Oval,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Fill {
    Solid,
    Pattern,
    Empty,
}

impl Value {
    pub const ALL: [Value; 3] = [Value::One, Value::Two, Value::Three];

    pub fn ordinal(self) -> u8 {
        match self {
            Value::One => 0,
            Value::Two => 1,
            Value::Three => 2,
        }
    }
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Purple];

    pub fn ordinal(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Purple => 2,
        }
    }
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Diamond, Shape::Flag, Shape::Oval];

    pub fn ordinal(self) -> u8 {
        match self {
            Shape::Diamond => 0,
            Shape::Flag => 1,
            Shape::Oval => 2,
        }
    }
}

impl Fill {
    pub const ALL: [Fill; 3] = [Fill::Solid, Fill::Pattern, Fill::Empty];

    pub fn ordinal(self) -> u8 {
        match self {
            Fill::Solid => 0,
            Fill::Pattern => 1,
            Fill::Empty => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Attribute {
    Value,
    Color,
    Shape,
    Fill,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Value,
        Attribute::Color,
        Attribute::Shape,
        Attribute::Fill,
    ];
}

/// A single card. The `id` is a presentation handle (image lookup and the
/// like); rule evaluation only ever looks at the four attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: u8,
    pub value: Value,
    pub color: Color,
    pub shape: Shape,
    pub fill: Fill,
}

impl Card {
    pub fn new(id: u8, value: Value, color: Color, shape: Shape, fill: Fill) -> Self {
        Self {
            id,
            value,
            color,
            shape,
            fill,
        }
    }

    /// All 81 cards. Ids follow the enumeration order with fill varying
    /// fastest and value slowest.
    pub fn universe() -> Vec<Card> {
        let mut cards = Vec::with_capacity(UNIVERSE_SIZE);
        let mut next_id = 0u8;
        for value in Value::ALL {
            for color in Color::ALL {
                for shape in Shape::ALL {
                    for fill in Fill::ALL {
                        cards.push(Card::new(next_id, value, color, shape, fill));
                        next_id += 1;
                    }
                }
            }
        }
        cards
    }

    pub fn ordinal(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Value => self.value.ordinal(),
            Attribute::Color => self.color.ordinal(),
            Attribute::Shape => self.shape.ordinal(),
            Attribute::Fill => self.fill.ordinal(),
        }
    }

    pub fn attributes(&self) -> [u8; 4] {
        Attribute::ALL.map(|attribute| self.ordinal(attribute))
    }
}
