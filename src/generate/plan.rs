//! The fixed back-to-front draw order.
//!
//! Order matters visually: arms cover the body seam, the shirt covers the
//! trouser waist, hands cover sleeve ends and hair sits over the glasses.

use crate::error::Result;
use crate::render::{DrawOp, Marker, Tint};
use crate::types::{BodyParts, Colour, Layer, Variant};

/// What the hands are doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hands<'a> {
    /// Default open hands.
    Empty,
    /// Hands posed around a held item, drawn again as an overlay later.
    HoldingItem(&'a Variant),
}

/// The resolved look of one portrait: chosen variants and final colours.
#[derive(Debug, Clone)]
pub struct Look<'a> {
    pub skin: Colour,
    pub hair_colour: Colour,
    pub shirt_colour: Colour,
    pub trousers_colour: Colour,
    pub eyes: &'a Variant,
    pub mouth: &'a Variant,
    pub shirt: &'a Variant,
    pub trousers: &'a Variant,
    pub hair: Option<&'a Variant>,
    pub glasses: Option<&'a Variant>,
    /// Beard style with its final colour.
    pub beard: Option<(&'a Variant, Colour)>,
    pub hat: Option<&'a Variant>,
    pub jewellery: Option<&'a Variant>,
    pub hands: Hands<'a>,
    pub pin: Option<&'a Variant>,
}

/// Build the draw plan for a look.
///
/// Fails when a variant lacks a layer a step needs; this happens before
/// anything is composited.
pub fn draw_plan<'a>(body: &'a BodyParts, look: &Look<'a>) -> Result<Vec<DrawOp<'a>>> {
    let mut ops = Vec::new();

    let saturated = |colour| Tint::new(colour, Marker::Saturated);
    let skin = Tint::new(look.skin, Marker::NonZero);

    if let Some(hair) = look.hair {
        push_first_tinted(&mut ops, "hair_back", &hair.background, saturated(look.hair_colour));
    }

    ops.push(DrawOp::tinted("body", &body.body, skin).replacing());
    ops.push(DrawOp::plain("arms", &body.arms));

    for layer in &look.trousers.background {
        ops.push(DrawOp::tinted("trousers", layer, saturated(look.trousers_colour)));
    }
    push_plain(&mut ops, "trousers", &look.trousers.foreground);

    for layer in &look.shirt.background {
        ops.push(DrawOp::tinted("shirt", layer, saturated(look.shirt_colour)));
    }
    push_plain(&mut ops, "shirt", &look.shirt.foreground);

    ops.push(DrawOp::tinted("head", &body.head, skin));
    ops.push(DrawOp::plain("chin", &body.chin));

    if let Some((beard, colour)) = look.beard {
        beard.first_foreground()?;
        push_first_tinted(&mut ops, "beard", &beard.foreground, saturated(colour));
    }

    ops.push(DrawOp::plain("feet", &body.feet));

    match look.hands {
        Hands::HoldingItem(_) => {
            ops.push(DrawOp::tinted("hands", &body.hands_item_bg, Tint::new(look.skin, Marker::Saturated)));
            ops.push(DrawOp::plain("hands", &body.hands_item_fg));
        }
        Hands::Empty => {
            ops.push(DrawOp::tinted("hands", &body.hands_bg, skin));
            ops.push(DrawOp::plain("hands", &body.hands_fg));
        }
    }

    ops.push(DrawOp::plain("eyes", look.eyes.first_foreground()?));
    ops.push(DrawOp::plain("mouth", look.mouth.first_foreground()?));

    if let Some(glasses) = look.glasses {
        ops.push(DrawOp::plain("glasses", glasses.first_foreground()?));
    }

    if let Some(hair) = look.hair {
        push_first_tinted(&mut ops, "hair", &hair.foreground, saturated(look.hair_colour));
    }

    push_overlay(&mut ops, "hat", look.hat);
    push_overlay(&mut ops, "jewellery", look.jewellery);
    if let Hands::HoldingItem(item) = look.hands {
        push_overlay(&mut ops, "item", Some(item));
    }
    push_overlay(&mut ops, "pin", look.pin);

    tracing::debug!(ops = ops.len(), "Built draw plan");

    Ok(ops)
}

/// Tint the first layer of a list, draw the rest as-is.
fn push_first_tinted<'a>(ops: &mut Vec<DrawOp<'a>>, step: &'static str, layers: &'a [Layer], tint: Tint) {
    for (i, layer) in layers.iter().enumerate() {
        if i == 0 {
            ops.push(DrawOp::tinted(step, layer, tint));
        } else {
            ops.push(DrawOp::plain(step, layer));
        }
    }
}

fn push_plain<'a>(ops: &mut Vec<DrawOp<'a>>, step: &'static str, layers: &'a [Layer]) {
    ops.extend(layers.iter().map(|layer| DrawOp::plain(step, layer)));
}

/// Accessories are drawn untinted, background layers first.
fn push_overlay<'a>(ops: &mut Vec<DrawOp<'a>>, step: &'static str, variant: Option<&'a Variant>) {
    if let Some(variant) = variant {
        ops.extend(variant.layers().map(|layer| DrawOp::plain(step, layer)));
    }
}
