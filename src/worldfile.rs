//! World <-> tagged JSON document adapter
//!
//! The persisted form is a tagged-object tree: every ball and curve is
//! `{"class": <kind>, "parameters": {...}}`, vectors are plain `{x, y}`,
//! and the document root is `{"balls": [...], "curves": [...]}`.
//!
//! `pos_prev` is transient resolver state and is never part of a document;
//! a deserialized ball starts a fresh step. Documents round-trip exactly:
//! re-serializing a loaded world reproduces the original document
//! field-for-field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::geometry::{Arc, CubicBezier, Curve, Segment, Vec2};
use crate::sim::{Ball, World};

const BALL_CLASS: &str = "Ball";
const SEGMENT_CLASS: &str = "Segment";
const ARC_CLASS: &str = "Arc";
const BEZIER_CLASS: &str = "CubicBezier";

#[derive(Debug, Serialize, Deserialize)]
struct WorldDoc {
    balls: Vec<TaggedDoc>,
    curves: Vec<TaggedDoc>,
}

/// One `{"class": ..., "parameters": ...}` object.
#[derive(Debug, Serialize, Deserialize)]
struct TaggedDoc {
    class: String,
    parameters: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct PointDoc {
    x: f64,
    y: f64,
}

impl From<Vec2> for PointDoc {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<PointDoc> for Vec2 {
    fn from(p: PointDoc) -> Self {
        Vec2::new(p.x, p.y)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct BallParams {
    pos: PointDoc,
    vel: PointDoc,
}

#[derive(Debug, Serialize, Deserialize)]
struct SegmentParams {
    p1: PointDoc,
    p2: PointDoc,
}

#[derive(Debug, Serialize, Deserialize)]
struct ArcParams {
    center: PointDoc,
    radius: f64,
    theta_min: f64,
    theta_max: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct BezierParams {
    p0: PointDoc,
    p1: PointDoc,
    p2: PointDoc,
    p3: PointDoc,
}

/// Serialize a world into its document tree.
///
/// # Errors
///
/// Only on non-finite float values, which JSON cannot represent.
pub fn to_document(world: &World) -> Result<Value> {
    Ok(serde_json::to_value(world_doc(world)?)?)
}

/// Rebuild a world from a document tree. The world gets the default
/// [`crate::SimConfig`]; tunables are runtime state, not document state.
///
/// # Errors
///
/// [`Error::UnknownCurveClass`] for a curve class this crate does not
/// know, [`Error::UnexpectedClass`] for a mistagged ball, and
/// [`Error::Malformed`] for structural problems. There is no partial
/// load: any failure aborts the whole world.
pub fn from_document(document: Value) -> Result<World> {
    decode(serde_json::from_value(document)?)
}

/// [`to_document`], rendered to a JSON string.
pub fn to_json_string(world: &World) -> Result<String> {
    Ok(serde_json::to_string(&world_doc(world)?)?)
}

/// [`from_document`] for a JSON string.
pub fn from_json_str(json: &str) -> Result<World> {
    decode(serde_json::from_str(json)?)
}

fn world_doc(world: &World) -> Result<WorldDoc> {
    let balls = world
        .balls()
        .iter()
        .map(|ball| {
            tagged(
                BALL_CLASS,
                &BallParams {
                    pos: ball.pos.into(),
                    vel: ball.vel.into(),
                },
            )
        })
        .collect::<Result<_>>()?;

    let curves = world
        .curves()
        .iter()
        .map(|curve| match curve {
            Curve::Segment(s) => tagged(
                SEGMENT_CLASS,
                &SegmentParams {
                    p1: s.p1.into(),
                    p2: s.p2.into(),
                },
            ),
            Curve::Arc(a) => tagged(
                ARC_CLASS,
                &ArcParams {
                    center: a.center.into(),
                    radius: a.radius,
                    theta_min: a.theta_min,
                    theta_max: a.theta_max,
                },
            ),
            Curve::CubicBezier(b) => tagged(
                BEZIER_CLASS,
                &BezierParams {
                    p0: b.p0.into(),
                    p1: b.p1.into(),
                    p2: b.p2.into(),
                    p3: b.p3.into(),
                },
            ),
        })
        .collect::<Result<_>>()?;

    Ok(WorldDoc { balls, curves })
}

fn tagged<T: Serialize>(class: &str, parameters: &T) -> Result<TaggedDoc> {
    Ok(TaggedDoc {
        class: class.to_owned(),
        parameters: serde_json::to_value(parameters)?,
    })
}

fn decode(doc: WorldDoc) -> Result<World> {
    let mut world = World::new();

    for entry in doc.balls {
        if entry.class != BALL_CLASS {
            return Err(Error::UnexpectedClass {
                expected: BALL_CLASS,
                found: entry.class,
            });
        }
        let params: BallParams = serde_json::from_value(entry.parameters)?;
        world.add_ball(Ball::new(params.pos.into(), params.vel.into()));
    }

    for entry in doc.curves {
        match entry.class.as_str() {
            SEGMENT_CLASS => {
                let p: SegmentParams = serde_json::from_value(entry.parameters)?;
                world.add_curve(Segment::new(p.p1.into(), p.p2.into()));
            }
            ARC_CLASS => {
                let p: ArcParams = serde_json::from_value(entry.parameters)?;
                world.add_curve(Arc::new(p.center.into(), p.radius, p.theta_min, p.theta_max));
            }
            BEZIER_CLASS => {
                let p: BezierParams = serde_json::from_value(entry.parameters)?;
                world.add_curve(CubicBezier::new(
                    p.p0.into(),
                    p.p1.into(),
                    p.p2.into(),
                    p.p3.into(),
                ));
            }
            _ => return Err(Error::UnknownCurveClass(entry.class)),
        }
    }

    Ok(world)
}
