//! Ready to use [`NamedNodeRef`](oxrdf::NamedNodeRef)s for the OWL vocabulary
//! terms this crate interprets.

pub mod owl {
    //! [OWL 2](https://www.w3.org/TR/owl2-overview/) vocabulary.
    use oxrdf::NamedNodeRef;

    /// The class of every individual (the universal top concept).
    pub const THING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Thing");
    /// The empty class (the universal bottom concept).
    pub const NOTHING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Nothing");
}
