use log::LevelFilter;
use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;
use topolib::{EdgeId, Graph, TopologyError, VertexId};

create_exception!(pytopo, IDNotUniqueError, PyException);
create_exception!(pytopo, InputLengthDoesNotMatchError, PyException);
create_exception!(pytopo, IDNotFoundError, PyException);
create_exception!(pytopo, GraphNotFullyConnectedError, PyException);
create_exception!(pytopo, GraphCycleError, PyException);
create_exception!(pytopo, EdgeAlreadyDisabledError, PyException);

/// Maps each topology error to its own Python exception class.
fn to_py_err(error: TopologyError) -> PyErr {
    let message = error.to_string();
    match error {
        TopologyError::IdNotUnique(_) => IDNotUniqueError::new_err(message),
        TopologyError::InputLengthMismatch { .. } => {
            InputLengthDoesNotMatchError::new_err(message)
        }
        TopologyError::IdNotFound(_) => IDNotFoundError::new_err(message),
        TopologyError::GraphNotFullyConnected => GraphNotFullyConnectedError::new_err(message),
        TopologyError::GraphCycle => GraphCycleError::new_err(message),
        TopologyError::EdgeAlreadyDisabled(_) => EdgeAlreadyDisabledError::new_err(message),
    }
}

// Never mutated after construction.
#[pyclass(frozen)]
struct GraphProcessor {
    graph: Graph,
}

#[pymethods]
impl GraphProcessor {
    #[new]
    fn new(
        vertex_ids: Vec<VertexId>,
        edge_ids: Vec<EdgeId>,
        edge_vertex_id_pairs: Vec<(VertexId, VertexId)>,
        edge_enabled: Vec<bool>,
        source_vertex_id: VertexId,
    ) -> PyResult<Self> {
        let graph = Graph::new(
            &vertex_ids,
            &edge_ids,
            &edge_vertex_id_pairs,
            &edge_enabled,
            source_vertex_id,
        )
        .map_err(to_py_err)?;
        Ok(GraphProcessor { graph })
    }

    fn find_downstream_vertices(&self, edge_id: EdgeId) -> PyResult<Vec<VertexId>> {
        self.graph.downstream_vertices(edge_id).map_err(to_py_err)
    }

    fn find_alternative_edges(&self, disabled_edge_id: EdgeId) -> PyResult<Vec<EdgeId>> {
        self.graph
            .alternative_edges(disabled_edge_id)
            .map_err(to_py_err)
    }

    /// Returns a new processor with `cut_edge_id` opened and `alternative_edge_id` closed.
    fn reconfigure(&self, cut_edge_id: EdgeId, alternative_edge_id: EdgeId) -> PyResult<Self> {
        let graph = self
            .graph
            .reconfigure(cut_edge_id, alternative_edge_id)
            .map_err(to_py_err)?;
        Ok(GraphProcessor { graph })
    }

    #[getter]
    fn vertex_ids(&self) -> Vec<VertexId> {
        self.graph.vertex_ids().to_vec()
    }

    #[getter]
    fn edge_ids(&self) -> Vec<EdgeId> {
        self.graph.edge_ids()
    }

    #[getter]
    fn edge_enabled(&self) -> Vec<bool> {
        self.graph.edge_enabled()
    }

    #[getter]
    fn source_vertex_id(&self) -> VertexId {
        self.graph.source_vertex_id()
    }
}

#[pyfunction]
#[pyo3(signature = (level=None))]
fn init_logging(level: Option<String>) -> PyResult<()> {
    let log_level = match level.as_deref() {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.to_string()),
    )
    .try_init()
    .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))?;
    Ok(())
}

#[pymodule]
fn pytopo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    m.add_class::<GraphProcessor>()?;
    m.add("IDNotUniqueError", py.get_type_bound::<IDNotUniqueError>())?;
    m.add(
        "InputLengthDoesNotMatchError",
        py.get_type_bound::<InputLengthDoesNotMatchError>(),
    )?;
    m.add("IDNotFoundError", py.get_type_bound::<IDNotFoundError>())?;
    m.add(
        "GraphNotFullyConnectedError",
        py.get_type_bound::<GraphNotFullyConnectedError>(),
    )?;
    m.add("GraphCycleError", py.get_type_bound::<GraphCycleError>())?;
    m.add(
        "EdgeAlreadyDisabledError",
        py.get_type_bound::<EdgeAlreadyDisabledError>(),
    )?;
    Ok(())
}
