//! Example: Drawing a status badge
//!
//! This example builds a small badge through a session over the in-memory
//! host and prints the resulting markup. Canonical kind names keep the
//! gradient's tag as `linearGradient`.

use svgproxy::{
    Attributes, Intercept, Session,
    config::{KindNaming, SessionConfig},
    host::{Host, memory::MemoryDocument},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::with_config(
        MemoryDocument::new(),
        SessionConfig::new().with_kind_names(KindNaming::Canonical),
        Attributes::new()
            .with("width", 120)
            .with("height", 20)
            .with("viewBox", "0 0 120 20"),
    )?;

    let defs = session.invoke("defs", Attributes::new())?;
    let gradient = defs.invoke(
        "linearGradient",
        Attributes::new().with("id", "shine").with("x2", 0).with("y2", "100%"),
    )?;
    gradient.invoke("stop", Attributes::new().with("offset", 0).with("stop-color", "#fff"))?;
    gradient.invoke("stop", Attributes::new().with("offset", 1).with("stop-opacity", 0.1))?;

    let group = session.invoke("g", Attributes::new())?;
    group.invoke(
        "rect",
        Attributes::new()
            .with("width", 60)
            .with("height", 20)
            .with("fill", "#555"),
    )?;
    let mut status = group.invoke(
        "rect",
        Attributes::new().with("x", 60).with("width", 60).with("height", 20),
    )?;
    status.set("fill", "#4c1")?;

    // Built detached, attached once complete
    let mut shine = group.invoke("createRect", Attributes::new())?;
    shine.set("width", 120)?;
    shine.set("height", 20)?;
    shine.set("fill", "url(#shine)")?;
    session.host().append_child(group.root(), shine.root())?;

    let mut label = group.invoke("text", Attributes::new().with("x", 8).with("y", 14))?;
    label.set("class", "label")?;

    println!("{}", session.host().render(*session.root())?);

    Ok(())
}
