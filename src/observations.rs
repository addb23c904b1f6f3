use crate::constants::{DetectionId, ImageId, MJD};

/// One diaSource as listed in the detection dump.
///
/// Fields
/// -----------------
/// * `detection_id` – Unique diaId, key of the [`Catalog`](crate::catalog::Catalog).
/// * `time` – Observation epoch in **MJD**.
/// * `object_id` – Label of the object the detection came from (the noise sentinel for false detections).
/// * `image_id` – obsHistId of the exposure the detection was made in.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub detection_id: DetectionId,
    pub time: MJD,
    pub object_id: String,
    pub image_id: ImageId,
}

impl Observation {
    pub fn new(
        detection_id: DetectionId,
        time: MJD,
        object_id: impl Into<String>,
        image_id: ImageId,
    ) -> Self {
        Observation {
            detection_id,
            time,
            object_id: object_id.into(),
            image_id,
        }
    }
}
