//! Embellishment pass
//!
//! Takes the finalized slot sequence, drops the structural placeholders
//! that accumulated no content, expands every hub into its feature
//! strokes, and resolves vowel attachments into stroke names. The pass
//! runs strictly left-to-right with one-slot lookahead: resolving a
//! slot's east/south attachment may consume the next slot's mirrored
//! west/north attachment (one combined stroke serving both hubs) before
//! that slot is itself visited.

use crate::models::{Direction, Glyph, Slot};
use crate::strokes::{combined_name, knows, openness, simple_name, strokes_for};

/// Attachment resolution order. The trailing sides come last so a glyph's
/// stroke list reads hub, leading vowels, trailing vowels.
const RESOLVE_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
];

/// Resolve a slot sequence into glyphs
pub fn embellish(slots: Vec<Slot>) -> Vec<Glyph> {
    let mut slots: Vec<Slot> = slots.into_iter().filter(|s| !s.empty).collect();
    let mut glyphs = Vec::with_capacity(slots.len());

    for i in 0..slots.len() {
        let (head, tail) = slots.split_at_mut(i + 1);
        let current = &mut head[i];
        let next = tail.first_mut();
        glyphs.push(resolve(current, next));
    }

    log::debug!("embellisher: resolved {} glyphs", glyphs.len());
    glyphs
}

/// Resolve one slot, possibly consuming a mirrored attachment from the
/// slot after it.
fn resolve(slot: &mut Slot, mut next: Option<&mut Slot>) -> Glyph {
    let mut glyph = Glyph::from_slot(slot);

    if let Some(center) = slot.center {
        for stroke in strokes_for(center) {
            glyph.strokes.push(stroke.name().to_string());
        }
    }

    for dir in RESOLVE_ORDER {
        let vowel = match slot.attachment(dir) {
            Some(v) => v,
            None => continue,
        };
        let own = openness(slot.center, dir);

        // trailing sides may fuse with the next slot's mirrored attachment
        if matches!(dir, Direction::South | Direction::East) {
            if let Some(neighbor) = next.as_deref_mut() {
                if neighbor.attachment(dir.mirror()) == Some(vowel) {
                    let theirs = openness(neighbor.center, dir.mirror());
                    let name = combined_name(vowel, dir, own, theirs);
                    if knows(&name) {
                        neighbor.clear_attachment(dir.mirror());
                        glyph.strokes.push(name);
                        continue;
                    }
                    // unknown combination: fall back to the simple stroke
                    // and let the neighbor resolve its own side
                }
            }
        }

        glyph.strokes.push(simple_name(vowel, dir, own));
    }

    glyph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::aligner::align;
    use crate::models::{Consonant, Vowel};
    use crate::parse::lex;

    fn embellish_text(text: &str) -> Vec<Glyph> {
        embellish(align(&lex(text)))
    }

    #[test]
    fn test_empty_slots_are_dropped() {
        let mut hub = Slot::new(0, 0);
        hub.set_center(Consonant::M);
        let placeholder = Slot::new(0, 1);
        let glyphs = embellish(vec![hub, placeholder]);
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[0].center, Some(Consonant::M));
    }

    #[test]
    fn test_hub_expands_to_feature_strokes() {
        let glyphs = embellish_text("m");
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[0].strokes, vec!["labial"]);
    }

    #[test]
    fn test_simple_attachment_name() {
        let glyphs = embellish_text("ma");
        assert_eq!(glyphs.len(), 1);
        // m is neither dental nor palatal: inner on every side
        assert!(glyphs[0].strokes.contains(&"a-south-inner".to_string()));
    }

    #[test]
    fn test_mirrored_pair_fuses_into_combined_stroke() {
        let glyphs = embellish_text("mam");
        assert_eq!(glyphs.len(), 2);
        assert!(glyphs[0]
            .strokes
            .contains(&"a-south-inner-inner".to_string()));
        // the second hub's north side was consumed by the merge
        assert!(glyphs[1].strokes.iter().all(|s| !s.starts_with("a-north")));
    }

    #[test]
    fn test_openness_comes_from_each_owner() {
        // t hub then k hub: shared placeholder e between them; t is not
        // palatal (inner trailing side), k is not dental (inner leading
        // side)
        let glyphs = embellish_text("tk");
        assert!(glyphs[0]
            .strokes
            .contains(&"e-south-inner-inner".to_string()));

        // k hub then t hub: k palatal makes the trailing side outer, t
        // dental makes the leading side outer
        let glyphs = embellish_text("kt");
        assert!(glyphs[0]
            .strokes
            .contains(&"e-south-outer-outer".to_string()));
    }

    #[test]
    fn test_unknown_combination_falls_back_to_simple() {
        // glide vowels have no combined template forms, so both sides
        // resolve independently
        let glyphs = embellish_text("mym");
        assert_eq!(glyphs.len(), 2);
        assert!(glyphs[0].strokes.contains(&"y-south-inner".to_string()));
        assert!(glyphs[1].strokes.contains(&"y-north-inner".to_string()));
    }

    #[test]
    fn test_embellishment_is_stable_when_nothing_merges() {
        // no empty slots, no resolvable merges: a second pass over the
        // same sequence is a no-op
        let mut a = Slot::new(0, 0);
        a.set_center(Consonant::T);
        a.attach(Direction::South, Vowel::Y);
        let mut b = Slot::new(0, 1);
        b.set_center(Consonant::K);
        b.attach(Direction::North, Vowel::Y);
        let slots = vec![a, b];
        let first = embellish(slots.clone());
        let second = embellish(slots);
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_only_slot_becomes_bare_glyph() {
        let glyphs = embellish_text("?");
        assert_eq!(glyphs.len(), 1);
        assert!(glyphs[0].strokes.is_empty());
        assert!(!glyphs[0].errors.is_empty());
    }
}
