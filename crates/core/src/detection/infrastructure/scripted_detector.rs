use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::detection_rect::DetectionRect;
use crate::shared::frame::Frame;
use crate::shared::landmark_set::{InvalidCardinality, LandmarkSet};

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read detection script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse detection script {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("frame {frame}, face {face}: {source}")]
    BadLandmarks {
        frame: usize,
        face: usize,
        #[source]
        source: InvalidCardinality,
    },
}

/// One face entry in the script: `[left, top, right, bottom]` plus
/// optional landmark points, all in working-frame coordinates.
#[derive(Deserialize)]
struct ScriptedFace {
    rect: [i32; 4],
    #[serde(default)]
    landmarks: Option<Vec<[f64; 2]>>,
}

/// Replays precomputed detections from a JSON sidecar.
///
/// Stands in for the opaque pretrained detector + shape model: the script
/// file plays the role of the model files read at startup. The top-level
/// JSON value is an array indexed by frame index; frames past the end of
/// the script produce no detections.
#[derive(Debug)]
pub struct ScriptedDetector {
    frames: Vec<Vec<(DetectionRect, Option<LandmarkSet>)>>,
}

impl ScriptedDetector {
    /// Loads and validates the script. Wrong landmark cardinality is a
    /// load-time error, mirroring a model that fails to deserialize.
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: Vec<Vec<ScriptedFace>> =
            serde_json::from_str(&text).map_err(|source| ScriptError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut frames = Vec::with_capacity(raw.len());
        for (frame_idx, faces) in raw.into_iter().enumerate() {
            let mut entries = Vec::with_capacity(faces.len());
            for (face_idx, face) in faces.into_iter().enumerate() {
                let [l, t, r, b] = face.rect;
                let rect = DetectionRect::new(l, t, r, b);
                let shape = match face.landmarks {
                    Some(points) => Some(
                        LandmarkSet::new(points.into_iter().map(|[x, y]| (x, y)).collect())
                            .map_err(|source| ScriptError::BadLandmarks {
                                frame: frame_idx,
                                face: face_idx,
                                source,
                            })?,
                    ),
                    None => None,
                };
                entries.push((rect, shape));
            }
            frames.push(entries);
        }

        Ok(Self { frames })
    }

    fn entries(&self, frame_index: usize) -> &[(DetectionRect, Option<LandmarkSet>)] {
        self.frames
            .get(frame_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl FaceDetector for ScriptedDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<DetectionRect>, Box<dyn std::error::Error>> {
        Ok(self
            .entries(frame.index())
            .iter()
            .map(|(rect, _)| *rect)
            .collect())
    }

    fn landmarks(
        &mut self,
        frame: &Frame,
        face: &DetectionRect,
    ) -> Result<Option<LandmarkSet>, Box<dyn std::error::Error>> {
        Ok(self
            .entries(frame.index())
            .iter()
            .find(|(rect, _)| rect == face)
            .and_then(|(_, shape)| shape.clone()))
    }
}
