use std::sync::Arc;
use crate::engine::structs::engine::Engine;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct HttpServiceData {
    pub engine: Arc<Engine>,
    pub stats: Arc<StatsAtomics>,
}
