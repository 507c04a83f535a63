//! Static catalog of the Gang of Four design patterns.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown category: '{category}' (expected creational, structural or behavioral)")]
    UnknownCategory { category: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "creational" => Ok(Category::Creational),
            "structural" => Ok(Category::Structural),
            "behavioral" | "behavioural" => Ok(Category::Behavioral),
            _ => Err(CatalogError::UnknownCategory {
                category: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatternEntry {
    pub name: &'static str,
    pub slug: &'static str,
    pub category: Category,
    pub intent: &'static str,
    pub scenario: &'static str,
    /// Endpoints that run this pattern, if it has an engine behind it.
    pub demos: &'static [&'static str],
}

const fn entry(
    name: &'static str,
    slug: &'static str,
    category: Category,
    intent: &'static str,
    scenario: &'static str,
) -> PatternEntry {
    PatternEntry {
        name,
        slug,
        category,
        intent,
        scenario,
        demos: &[],
    }
}

use Category::{Behavioral, Creational, Structural};

static PATTERNS: [PatternEntry; 22] = [
    entry(
        "Singleton",
        "singleton",
        Creational,
        "Ensure a class has one instance and provide a global point of access to it.",
        "A shared configuration registry read by every service.",
    ),
    entry(
        "Factory Method",
        "factory-method",
        Creational,
        "Let subclasses decide which concrete product to instantiate.",
        "A notification service that creates email, SMS or push senders.",
    ),
    entry(
        "Abstract Factory",
        "abstract-factory",
        Creational,
        "Create families of related objects without naming their concrete types.",
        "A UI kit producing matching buttons and checkboxes per platform theme.",
    ),
    entry(
        "Builder",
        "builder",
        Creational,
        "Separate the construction of a complex object from its representation.",
        "Assembling a computer configuration step by step.",
    ),
    entry(
        "Prototype",
        "prototype",
        Creational,
        "Create new objects by copying an existing instance.",
        "Cloning document templates before filling them in.",
    ),
    entry(
        "Adapter",
        "adapter",
        Structural,
        "Convert one interface into another that clients expect.",
        "Wrapping a legacy payment gateway behind the current payment interface.",
    ),
    entry(
        "Bridge",
        "bridge",
        Structural,
        "Decouple an abstraction from its implementation so both can vary.",
        "Remote controls that work with any brand of device.",
    ),
    entry(
        "Composite",
        "composite",
        Structural,
        "Treat individual objects and compositions of objects uniformly.",
        "Computing the size of a directory tree of files and folders.",
    ),
    entry(
        "Decorator",
        "decorator",
        Structural,
        "Attach additional responsibilities to an object dynamically.",
        "Adding milk and sugar to a coffee order and pricing the result.",
    ),
    entry(
        "Facade",
        "facade",
        Structural,
        "Provide a single simplified interface to a set of subsystems.",
        "A home theater facade that starts the projector, amplifier and player.",
    ),
    entry(
        "Flyweight",
        "flyweight",
        Structural,
        "Share fine-grained objects to support large numbers of them efficiently.",
        "Reusing glyph objects across every character in a text document.",
    ),
    entry(
        "Proxy",
        "proxy",
        Structural,
        "Provide a surrogate that controls access to another object.",
        "A caching proxy in front of a slow image loader.",
    ),
    PatternEntry {
        demos: &["/demos/chain/support", "/demos/chain/expense"],
        ..entry(
            "Chain of Responsibility",
            "chain-of-responsibility",
            Behavioral,
            "Pass a request along a chain of handlers until one of them handles it.",
            "Support tickets escalating from general to technical to critical response.",
        )
    },
    entry(
        "Command",
        "command",
        Behavioral,
        "Encapsulate a request as an object so it can be queued, logged or undone.",
        "A text editor with undoable edit operations.",
    ),
    entry(
        "Iterator",
        "iterator",
        Behavioral,
        "Access elements of a collection sequentially without exposing its structure.",
        "Walking a playlist forwards and in shuffle order.",
    ),
    PatternEntry {
        demos: &["/demos/mediator/chat", "/demos/mediator/air-traffic"],
        ..entry(
            "Mediator",
            "mediator",
            Behavioral,
            "Centralize communication between objects so they do not refer to each other.",
            "Aircraft coordinating runway use through a control tower.",
        )
    },
    entry(
        "Memento",
        "memento",
        Behavioral,
        "Capture and restore an object's internal state without breaking encapsulation.",
        "Saving and restoring editor snapshots.",
    ),
    entry(
        "Observer",
        "observer",
        Behavioral,
        "Notify dependents automatically when an object changes state.",
        "Stock price subscribers receiving ticker updates.",
    ),
    PatternEntry {
        demos: &["/demos/state/order", "/demos/state/traffic-light"],
        ..entry(
            "State",
            "state",
            Behavioral,
            "Let an object alter its behavior when its internal state changes.",
            "An order moving from pending through processing and shipping to delivery.",
        )
    },
    entry(
        "Strategy",
        "strategy",
        Behavioral,
        "Define a family of interchangeable algorithms behind one interface.",
        "Choosing a shipping cost calculation per carrier.",
    ),
    entry(
        "Template Method",
        "template-method",
        Behavioral,
        "Define an algorithm skeleton and let subclasses fill in specific steps.",
        "Data importers sharing parse, validate and save steps.",
    ),
    entry(
        "Visitor",
        "visitor",
        Behavioral,
        "Add operations to an object structure without changing its element types.",
        "Exporting shapes to XML and JSON without touching the shape types.",
    ),
];

/// Every catalogued pattern, grouped by category.
pub fn all() -> &'static [PatternEntry] {
    &PATTERNS
}

pub fn by_category(category: Category) -> Vec<PatternEntry> {
    PATTERNS
        .iter()
        .filter(|p| p.category == category)
        .copied()
        .collect()
}

pub fn find(slug: &str) -> Option<&'static PatternEntry> {
    PATTERNS.iter().find(|p| p.slug == slug)
}
