//! Original record layout, still found in older event files.

use hu_core::{Error, Result, RingsTable};

/// Struct declarations registered with the analysis framework.
pub const DATAFRAME_H: &str = "\
namespace xAOD{\
    struct cell_t{\
      float e;\
      float et;\
      float eta;\
      float phi;\
      float deta;\
      float dphi;\
    };\
    struct CaloCell_t{\
      float e;\
      float et;\
      float eta;\
      float phi;\
      float deta;\
      float dphi;\
      int descriptor_link;\
    };\
    struct CaloDetDescriptor_t{\
      int sampling;\
      int detector;\
      float eta;\
      float phi;\
      float deta;\
      float dphi;\
      float rmin;\
      float rmax;\
      float e;\
      float etruth;\
      int bcid_start;\
      int bcid_end;\
      int bcid_truth;\
      float bc_duration;\
      unsigned int hash;\
      int cell_link;\
    };\
    struct CaloCluster_t{\
      float e;\
      float et;\
      float eta;\
      float phi;\
      float deta;\
      float dphi;\
      float e0;\
      float e1;\
      float e2;\
      float e3;\
      float ehad1;\
      float ehad2;\
      float ehad3;\
      float etot;\
      float e233;\
      float e237;\
      float e277;\
      float emaxs1;\
      float emaxs2;\
      float e2tsts1;\
      float reta;\
      float rphi;\
      float rhad;\
      float rhad1;\
      float eratio;\
      float f0;\
      float f1;\
      float f2;\
      float f3;\
      float weta2;\
      std::vector<int> cell_links;\
    };\
    struct CaloRings_t{\
      int cluster_link;\
      std::vector<float> rings;\
    };\
    struct EventInfo_t{\
      float eventNumber;\
      float avgmu;\
    };\
    struct TruthParticle_t{\
      int pdgid;\
      float e;\
      float et;\
      float eta;\
      float phi;\
      float px;\
      float py;\
      float pz;\
    };\
}";

/// Declared struct names, in declaration order.
pub const RECORD_NAMES: [&str; 7] = [
    "cell_t",
    "CaloCell_t",
    "CaloDetDescriptor_t",
    "CaloCluster_t",
    "CaloRings_t",
    "EventInfo_t",
    "TruthParticle_t",
];

record! {
    /// Minimal calorimeter cell.
    #[repr(C)]
    Cell => "cell_t" { e: f32, et: f32, eta: f32, phi: f32, deta: f32, dphi: f32 }
}

record! {
    /// Calorimeter cell linked to its detector descriptor.
    #[repr(C)]
    CaloCell => "CaloCell_t" {
        e: f32, et: f32, eta: f32, phi: f32, deta: f32, dphi: f32, descriptor_link: i32,
    }
}

record! {
    /// Readout descriptor of a calorimeter cell.
    #[repr(C)]
    CaloDetDescriptor => "CaloDetDescriptor_t" {
        sampling: i32, detector: i32, eta: f32, phi: f32, deta: f32, dphi: f32,
        rmin: f32, rmax: f32, e: f32, etruth: f32, bcid_start: i32, bcid_end: i32,
        bcid_truth: i32, bc_duration: f32, hash: u32, cell_link: i32,
    }
}

record! {
    /// Reconstructed cluster with shower-shape variables.
    CaloCluster => "CaloCluster_t" {
        e: f32, et: f32, eta: f32, phi: f32, deta: f32, dphi: f32,
        e0: f32, e1: f32, e2: f32, e3: f32, ehad1: f32, ehad2: f32, ehad3: f32,
        etot: f32, e233: f32, e237: f32, e277: f32, emaxs1: f32, emaxs2: f32,
        e2tsts1: f32, reta: f32, rphi: f32, rhad: f32, rhad1: f32, eratio: f32,
        f0: f32, f1: f32, f2: f32, f3: f32, weta2: f32, cell_links: Vec<i32>,
    }
}

record! {
    /// Ring energy sums built around a cluster.
    CaloRings => "CaloRings_t" { cluster_link: i32, rings: Vec<f32> }
}

record! {
    /// Per-event bookkeeping.
    #[repr(C)]
    EventInfo => "EventInfo_t" { eventNumber: f32, avgmu: f32 }
}

record! {
    /// Generator-level particle.
    #[repr(C)]
    TruthParticle => "TruthParticle_t" {
        pdgid: i32, e: f32, et: f32, eta: f32, phi: f32, px: f32, py: f32, pz: f32,
    }
}

impl CaloRings {
    /// Stack the rings of several records into a [`RingsTable`].
    pub fn to_rings_table(records: &[CaloRings]) -> Result<RingsTable> {
        let width = records.first().map(|r| r.rings.len()).unwrap_or(0);
        let mut flat = Vec::with_capacity(records.len() * width);
        for (i, r) in records.iter().enumerate() {
            if r.rings.len() != width {
                return Err(Error::Shape(format!(
                    "CaloRings record {i} has {} rings, expected {width}",
                    r.rings.len()
                )));
            }
            flat.extend(r.rings.iter().map(|&v| f64::from(v)));
        }
        RingsTable::from_row_major(records.len(), width, &flat)
    }
}
