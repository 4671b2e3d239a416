//! Current record layout.
//!
//! `CaloRings_t` and `EventInfo_t` are unchanged from the original layout, so
//! their mirrors are shared with [`super::dataframe`].

pub use super::dataframe::{CaloRings, EventInfo};

/// Struct declarations registered with the analysis framework.
pub const CPP_STRUCTS: &str = "\
namespace xAOD{\
    struct CaloCell_t{\
        float e;\
        float et;\
        float tau;\
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
        float e;\
        float tau;\
        float edep;\
        int bcid_start;\
        int bcid_end;\
        float bc_duration;\
        std::vector<float> pulse;\
        std::vector<float> edep_per_bunch;\
        std::vector<float> tof;\
        unsigned long int hash;\
        int cell_link;\
        float z;\
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
        float secondR;\
        float lambdaCenter;\
        float secondLambda;\
        float fracMax;\
        float lateralMom;\
        float longitudinalMom;\
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
        int seedid;\
        float e;\
        float et;\
        float eta;\
        float phi;\
        float px;\
        float py;\
        float pz;\
        float vx;\
        float vy;\
        float vz;\
    };\
    struct Electron_t{\
        int cluster_link;\
        float e;\
        float et;\
        float eta;\
        float phi;\
        std::vector<bool> decisions;\
    };\
    struct EventSeed_t{\
        int id;\
        float e;\
        float et;\
        float eta;\
        float phi;\
    };\
}";

/// Declared struct names, in declaration order.
pub const RECORD_NAMES: [&str; 8] = [
    "CaloCell_t",
    "CaloDetDescriptor_t",
    "CaloCluster_t",
    "CaloRings_t",
    "EventInfo_t",
    "TruthParticle_t",
    "Electron_t",
    "EventSeed_t",
];

record! {
    /// Calorimeter cell with its pulse time.
    #[repr(C)]
    CaloCell => "CaloCell_t" {
        e: f32, et: f32, tau: f32, eta: f32, phi: f32, deta: f32, dphi: f32, descriptor_link: i32,
    }
}

record! {
    /// Readout descriptor with the sampled pulse and per-bunch deposits.
    CaloDetDescriptor => "CaloDetDescriptor_t" {
        sampling: i32, detector: i32, eta: f32, phi: f32, deta: f32, dphi: f32,
        e: f32, tau: f32, edep: f32, bcid_start: i32, bcid_end: i32, bc_duration: f32,
        pulse: Vec<f32>, edep_per_bunch: Vec<f32>, tof: Vec<f32>,
        hash: u64, cell_link: i32, z: f32,
    }
}

record! {
    /// Reconstructed cluster with shower-shape variables and moments.
    CaloCluster => "CaloCluster_t" {
        e: f32, et: f32, eta: f32, phi: f32, deta: f32, dphi: f32,
        e0: f32, e1: f32, e2: f32, e3: f32, ehad1: f32, ehad2: f32, ehad3: f32,
        etot: f32, e233: f32, e237: f32, e277: f32, emaxs1: f32, emaxs2: f32,
        e2tsts1: f32, reta: f32, rphi: f32, rhad: f32, rhad1: f32, eratio: f32,
        f0: f32, f1: f32, f2: f32, f3: f32, weta2: f32,
        secondR: f32, lambdaCenter: f32, secondLambda: f32, fracMax: f32,
        lateralMom: f32, longitudinalMom: f32, cell_links: Vec<i32>,
    }
}

record! {
    /// Generator-level particle with its production vertex.
    #[repr(C)]
    TruthParticle => "TruthParticle_t" {
        pdgid: i32, seedid: i32, e: f32, et: f32, eta: f32, phi: f32,
        px: f32, py: f32, pz: f32, vx: f32, vy: f32, vz: f32,
    }
}

record! {
    /// Reconstructed electron candidate and its selector decisions.
    Electron => "Electron_t" {
        cluster_link: i32, e: f32, et: f32, eta: f32, phi: f32, decisions: Vec<bool>,
    }
}

record! {
    /// Seed that a cluster was grown from.
    #[repr(C)]
    EventSeed => "EventSeed_t" { id: i32, e: f32, et: f32, eta: f32, phi: f32 }
}

impl Electron {
    /// Whether the selector at `index` accepted the candidate.
    pub fn passed(&self, index: usize) -> bool {
        self.decisions.get(index).copied().unwrap_or(false)
    }
}
