//! Plain-text catalogue dumps, one line per item.

use std::io::Write;

use scl::chain::{Chain, LetterId};
use scl::polygons::{Catalogue, CentralSide};

pub fn catalogue(w: &mut impl Write, chain: &Chain, cat: &Catalogue) -> std::io::Result<()> {
    letters(w, chain)?;
    group_letters(w, chain)?;
    central_edges(w, chain, cat)?;
    interface_edges(w, cat)?;
    central_polygons(w, cat)?;
    group_pieces(w, chain, cat)?;
    Ok(())
}

fn letters(w: &mut impl Write, chain: &Chain) -> std::io::Result<()> {
    writeln!(w, "letters:")?;
    for (i, l) in chain.letters().iter().enumerate() {
        writeln!(
            w,
            "{i}: {} (word {}, pos {}, group {})",
            l.letter, l.word, l.index, l.group
        )?;
    }
    Ok(())
}

fn group_letters(w: &mut impl Write, chain: &Chain) -> std::io::Result<()> {
    writeln!(w, "group letters:")?;
    for g in 0..chain.group().num_groups() {
        let fmt = |ids: &[LetterId]| {
            ids.iter()
                .map(|id| id.0.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        writeln!(
            w,
            "{}: regular [{}] inverse [{}]",
            chain.group().symbol(g),
            fmt(chain.regular_letters(g)),
            fmt(chain.inverse_letters(g)),
        )?;
    }
    Ok(())
}

fn central_edges(w: &mut impl Write, chain: &Chain, cat: &Catalogue) -> std::io::Result<()> {
    writeln!(w, "central edges:")?;
    for (i, e) in cat.central_edges.edges().iter().enumerate() {
        writeln!(
            w,
            "{i}: ({}, {}) ~ ({}, {})",
            e.first.0,
            e.last.0,
            chain.prev_letter(e.last).0,
            chain.next_letter(e.first).0,
        )?;
    }
    Ok(())
}

fn interface_edges(w: &mut impl Write, cat: &Catalogue) -> std::io::Result<()> {
    writeln!(w, "interface edges:")?;
    for (i, e) in cat.interface_edges.edges().iter().enumerate() {
        writeln!(w, "{i}: ({}, {}) group {}", e.first.0, e.last.0, e.group)?;
    }
    Ok(())
}

fn central_polygons(w: &mut impl Write, cat: &Catalogue) -> std::io::Result<()> {
    writeln!(w, "central polygons:")?;
    for (i, p) in cat.central_polygons.iter().enumerate() {
        write!(w, "{i}:")?;
        for side in &p.sides {
            match side {
                CentralSide::Interface(e) => write!(w, " i{e}")?,
                CentralSide::Central(c) => write!(w, " c{}", c.index)?,
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

fn group_pieces(w: &mut impl Write, chain: &Chain, cat: &Catalogue) -> std::io::Result<()> {
    for gp in &cat.group_pieces {
        let symbol = chain.group().symbol(gp.group);
        writeln!(w, "{symbol} rectangles:")?;
        for (i, r) in gp.rectangles.iter().enumerate() {
            writeln!(w, "{i}: {} x {}", r.regular.0, r.inverse.0)?;
        }
        writeln!(w, "{symbol} polygons:")?;
        for (i, p) in gp.polygons.iter().enumerate() {
            write!(w, "{i}:")?;
            for side in &p.sides {
                let stops = side
                    .letters
                    .iter()
                    .map(|l| l.0.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(w, " [{stops}]")?;
            }
            writeln!(w)?;
        }
    }
    Ok(())
}
