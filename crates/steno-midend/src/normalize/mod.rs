//! Normalization maps any steno tree onto the subset that has a direct
//! counterpart in the canonical notation: dots, identifiers, generics and
//! callables. Everything else becomes a generic over a member of the
//! canonical namespace, so `?int` turns into `typing.Optional[int]`.
//!
//! Signatures are the one lossy case. A canonical callable only knows
//! positional argument types, so signatures with names, keyword arguments or
//! typed variadics are rejected rather than silently simplified.


use log::{debug, trace};
use steno_common::elements::{CallableParameters, Identifier, Parameter, Signature, Steno};
use steno_common::DEFAULT_NAMESPACE;

use crate::error::ConversionError;

/// Normalize `tree` using the [default namespace](DEFAULT_NAMESPACE).
pub fn normalize(tree: &Steno) -> Result<Steno, ConversionError> {
    Normalizer::default().normalize(tree)
}

#[derive(Clone, Debug)]
pub struct Normalizer {
    namespace: Identifier,
}

impl Normalizer {
    /// Create a normalizer spelling canonical names as members of the dotted
    /// `namespace`. An empty namespace leaves the names unqualified.
    pub fn new(namespace: &str) -> Self {
        let namespace = if namespace.is_empty() {
            Identifier(Vec::new())
        } else {
            Identifier::dotted(namespace)
        };

        Self { namespace }
    }

    pub fn normalize(&self, tree: &Steno) -> Result<Steno, ConversionError> {
        debug!("normalizing into `{}`", self.namespace);

        let normal = self.convert(tree)?;

        trace!("normalized to {normal:?}");
        Ok(normal)
    }

    fn convert(&self, tree: &Steno) -> Result<Steno, ConversionError> {
        if let Some(reason) = tree.malformation() {
            return Err(ConversionError::Malformed {
                shape: tree.shape(),
                reason,
            });
        }

        Ok(match tree {
            Steno::Dots | Steno::Identifier(_) => tree.clone(),

            Steno::Generic { base, parameters } => {
                Steno::generic(base.clone(), self.convert_all(parameters)?)
            }

            Steno::Any => Steno::Identifier(self.qualified("Any")),

            Steno::Optional(base) => self.wrap("Optional", vec![self.convert(base)?]),
            Steno::Union(members) => self.wrap("Union", self.convert_all(members)?),

            Steno::Tuple(elements) => {
                if elements.len() > 2 && elements.last().is_some_and(Steno::is_dots) {
                    debug!(
                        "variadic tuple with {} elements before `...`",
                        elements.len() - 1
                    );
                }

                self.wrap("Tuple", self.convert_all(elements)?)
            }

            Steno::List(values) => self.wrap("List", vec![self.convert(values)?]),
            Steno::Set(values) => self.wrap("Set", vec![self.convert(values)?]),
            Steno::Dict { keys, values } => {
                self.wrap("Dict", vec![self.convert(keys)?, self.convert(values)?])
            }

            Steno::Literal(_) => self.wrap("Literal", vec![tree.clone()]),

            Steno::Shorthand(kind, base) => {
                self.wrap(kind.canonical_name(), vec![self.convert(base)?])
            }

            Steno::Signature(signature) => self.convert_signature(signature)?,

            Steno::Callable {
                parameters,
                returns,
            } => {
                let parameters = match parameters {
                    CallableParameters::Any => CallableParameters::Any,
                    CallableParameters::Fixed(parameters) => {
                        CallableParameters::Fixed(self.convert_all(parameters)?)
                    }
                };

                Steno::callable(parameters, self.convert(returns)?)
            }
        })
    }

    /// Turn a signature into a callable, if no information is lost doing so.
    fn convert_signature(&self, signature: &Signature) -> Result<Steno, ConversionError> {
        if !signature.keywords.is_empty() || signature.kwargs.is_some() {
            return Err(ConversionError::KeywordParameters);
        }

        let explicit = || signature.positional.iter().chain(&signature.mixed);

        let parameters = match &signature.args {
            Some(args) => {
                if args.base != Steno::Any {
                    return Err(ConversionError::TypedVarargs);
                }

                if explicit().next().is_some() {
                    return Err(ConversionError::MixedVarargs);
                }

                CallableParameters::Any
            }

            None => {
                if let Some(name) = explicit().find_map(|parameter| parameter.name.as_ref()) {
                    return Err(ConversionError::NamedParameters { name: name.clone() });
                }

                let bases = explicit()
                    .map(|Parameter { base, .. }| self.convert(base))
                    .collect::<Result<_, _>>()?;

                CallableParameters::Fixed(bases)
            }
        };

        Ok(Steno::callable(parameters, self.convert(&signature.returns)?))
    }

    fn convert_all(&self, trees: &[Steno]) -> Result<Vec<Steno>, ConversionError> {
        trees.iter().map(|tree| self.convert(tree)).collect()
    }

    fn qualified(&self, member: &str) -> Identifier {
        self.namespace.member(member)
    }

    fn wrap(&self, member: &str, parameters: Vec<Steno>) -> Steno {
        Steno::generic(self.qualified(member), parameters)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
