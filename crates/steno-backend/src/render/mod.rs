//! Rendering spells a tree back as text. Trees from the parser are rendered
//! in steno notation and normalized trees in canonical notation; both are
//! handled by the same rules, since the canonical forms are just generics
//! and identifiers to the renderer.
//!
//! The renderer refuses trees which the parser could never produce, since
//! their text would parse back into a different tree.

#[cfg(test)]
mod tests;

use log::{debug, trace};
use steno_common::elements::{CallableParameters, Identifier, Parameter, Signature, Steno};
use steno_common::DEFAULT_NAMESPACE;

use crate::error::RenderError;

/// Render `tree` spelling callables in the [default namespace](DEFAULT_NAMESPACE).
pub fn render(tree: &Steno) -> Result<String, RenderError> {
    Renderer::default().render(tree)
}

#[derive(Clone, Debug)]
pub struct Renderer {
    callable: Identifier,
}

impl Renderer {
    /// Create a renderer spelling callables as members of the dotted
    /// `namespace`. An empty namespace leaves the name unqualified.
    pub fn new(namespace: &str) -> Self {
        let callable = if namespace.is_empty() {
            Identifier::dotted("Callable")
        } else {
            Identifier::dotted(namespace).member("Callable")
        };

        Self { callable }
    }

    pub fn render(&self, tree: &Steno) -> Result<String, RenderError> {
        debug!("rendering {}", tree.shape());

        let mut out = String::new();
        self.write(&mut out, tree)?;

        trace!("rendered `{out}`");
        Ok(out)
    }

    fn write(&self, out: &mut String, tree: &Steno) -> Result<(), RenderError> {
        if let Some(reason) = tree.malformation() {
            return Err(RenderError::Malformed {
                shape: tree.shape(),
                reason,
            });
        }

        match tree {
            Steno::Dots => out.push_str("..."),
            Steno::Identifier(identifier) => out.push_str(&identifier.to_string()),

            Steno::Generic { base, parameters } => {
                out.push_str(&base.to_string());
                out.push('[');
                self.write_all(out, parameters)?;
                out.push(']');
            }

            Steno::Any => out.push('_'),

            Steno::Optional(base) => {
                if let Steno::Optional(_) = **base {
                    return Err(RenderError::NestedOptional);
                }

                out.push('?');
                self.write(out, base)?;
            }

            Steno::Union(members) => self.write_union(out, members)?,

            Steno::Tuple(elements) => {
                out.push('(');
                self.write_all(out, elements)?;
                out.push(')');
            }

            Steno::List(values) => {
                out.push('[');
                self.write(out, values)?;
                out.push(']');
            }

            Steno::Dict { keys, values } => {
                out.push('{');
                self.write(out, keys)?;
                out.push_str(": ");
                self.write(out, values)?;
                out.push('}');
            }

            Steno::Set(values) => {
                out.push('{');
                self.write(out, values)?;
                out.push('}');
            }

            Steno::Literal(literal) => out.push_str(&literal.to_string()),

            Steno::Shorthand(kind, base) => {
                out.push_str(kind.keyword());
                out.push(' ');
                self.write(out, base)?;
            }

            Steno::Signature(signature) => self.write_signature(out, signature)?,

            Steno::Callable {
                parameters,
                returns,
            } => {
                out.push_str(&self.callable.to_string());
                out.push('[');

                match parameters {
                    CallableParameters::Any => out.push_str("..."),
                    CallableParameters::Fixed(parameters) => {
                        out.push('[');
                        self.write_all(out, parameters)?;
                        out.push(']');
                    }
                }

                out.push_str(", ");
                self.write(out, returns)?;
                out.push(']');
            }
        }

        Ok(())
    }

    /// Members are separated by `or`. A prefix form such as `?a` takes
    /// everything to its right, so it may only be the last member.
    fn write_union(&self, out: &mut String, members: &[Steno]) -> Result<(), RenderError> {
        let last = members.len().saturating_sub(1);

        for (index, member) in members.iter().enumerate() {
            match member {
                Steno::Union(_) => return Err(RenderError::NestedUnion),
                Steno::Signature(_) => {
                    return Err(RenderError::UnionMember {
                        shape: member.shape(),
                    })
                }
                Steno::Optional(_) | Steno::Shorthand(..) if index != last => {
                    return Err(RenderError::UnionMember {
                        shape: member.shape(),
                    })
                }
                _ => {}
            }

            if index > 0 {
                out.push_str(" or ");
            }

            self.write(out, member)?;
        }

        Ok(())
    }

    fn write_signature(&self, out: &mut String, signature: &Signature) -> Result<(), RenderError> {
        if signature.is_unconstrained() {
            out.push_str("(...) -> ");
            return self.write(out, &signature.returns);
        }

        let mut sections: Vec<String> = Vec::new();

        for parameter in &signature.positional {
            sections.push(self.parameter(parameter)?);
        }

        if !signature.positional.is_empty() {
            sections.push(String::from("/"));
        }

        for parameter in &signature.mixed {
            sections.push(self.parameter(parameter)?);
        }

        match &signature.args {
            Some(args) => sections.push(format!("*{}", self.parameter(args)?)),
            None if !signature.keywords.is_empty() => sections.push(String::from("*")),
            None => {}
        }

        for parameter in &signature.keywords {
            sections.push(self.parameter(parameter)?);
        }

        if let Some(kwargs) = &signature.kwargs {
            sections.push(format!("**{}", self.parameter(kwargs)?));
        }

        out.push('(');
        out.push_str(&sections.join(", "));
        out.push_str(") -> ");
        self.write(out, &signature.returns)
    }

    fn parameter(&self, parameter: &Parameter) -> Result<String, RenderError> {
        let mut out = String::new();

        if let Some(name) = &parameter.name {
            out.push_str(name);
            out.push_str(": ");
        }

        self.write(&mut out, &parameter.base)?;
        Ok(out)
    }

    fn write_all(&self, out: &mut String, trees: &[Steno]) -> Result<(), RenderError> {
        for (index, tree) in trees.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }

            self.write(out, tree)?;
        }

        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
