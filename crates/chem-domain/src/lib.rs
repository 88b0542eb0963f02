// chem-domain library entry point
pub mod charge;
pub mod compound;
pub mod conformer;
pub mod error;
pub mod mol_block;
pub mod molecule;
pub use charge::estimate_net_charge;
pub use compound::{CompoundId, CompoundRecord};
pub use conformer::{search_conformers, Conformer, ConformerSearch, EmbedOptions};
pub use error::{DomainError, LookupError};
pub use mol_block::MolBlockHeader;
pub use molecule::Molecule;
