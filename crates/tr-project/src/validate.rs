//! Project validation logic.

use std::collections::HashSet;

use crate::schema::Project;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    let scale = project.export.scale;
    if !scale.is_finite() || scale < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "export.scale".to_string(),
            value: scale.to_string(),
            reason: "must be finite and non-negative".to_string(),
        });
    }
    if project.export.renderer.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "export.renderer".to_string(),
            value: String::new(),
            reason: "must name a program".to_string(),
        });
    }

    let mut node_ids = HashSet::new();
    for node in &project.nodes {
        if node.id.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "node.id".to_string(),
                value: String::new(),
                reason: "must not be empty".to_string(),
            });
        }
        if !node_ids.insert(node.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: node.id.clone(),
                context: "nodes".to_string(),
            });
        }
        if let Some(pos) = node.position
            && !(pos.x.is_finite() && pos.y.is_finite())
        {
            return Err(ValidationError::InvalidValue {
                field: format!("node {} position", node.id),
                value: format!("({}, {})", pos.x, pos.y),
                reason: "coordinates must be finite".to_string(),
            });
        }
    }

    for (i, edge) in project.edges.iter().enumerate() {
        for endpoint in [&edge.from, &edge.to] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: endpoint.clone(),
                    context: format!("edge {i}"),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EdgeDef, ExportSettings, NodeDef};
    use tr_core::Position;

    fn node(id: &str) -> NodeDef {
        NodeDef {
            id: id.to_string(),
            label: id.to_uppercase(),
            position: None,
        }
    }

    fn project(nodes: Vec<NodeDef>, edges: Vec<EdgeDef>) -> Project {
        Project {
            name: "test".to_string(),
            export: ExportSettings::default(),
            nodes,
            edges,
        }
    }

    fn edge(from: &str, to: &str) -> EdgeDef {
        EdgeDef {
            from: from.to_string(),
            to: to.to_string(),
            label: String::new(),
            bidirectional: false,
        }
    }

    #[test]
    fn accepts_self_loop() {
        let p = project(vec![node("a")], vec![edge("a", "a")]);
        assert_eq!(validate_project(&p), Ok(()));
    }

    #[test]
    fn rejects_duplicate_node() {
        let p = project(vec![node("a"), node("a")], vec![]);
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn rejects_empty_id() {
        let p = project(vec![node("")], vec![]);
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_dangling_edge() {
        let p = project(vec![node("a")], vec![edge("a", "b")]);
        assert_eq!(
            validate_project(&p),
            Err(ValidationError::MissingReference {
                id: "b".to_string(),
                context: "edge 0".to_string(),
            })
        );
    }

    #[test]
    fn rejects_non_finite_position() {
        let mut n = node("a");
        n.position = Some(Position {
            x: f64::NAN,
            y: 0.0,
        });
        assert!(validate_project(&project(vec![n], vec![])).is_err());
    }

    #[test]
    fn rejects_negative_scale() {
        let mut p = project(vec![], vec![]);
        p.export.scale = -1.0;
        assert!(validate_project(&p).is_err());
        p.export.scale = f64::INFINITY;
        assert!(validate_project(&p).is_err());
    }
}
