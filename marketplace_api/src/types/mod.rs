mod common;
pub use self::common::{EntityUuid, Statut};

mod timestamp;

mod pays;
pub use self::pays::{Pays, PaysInput};

mod statut_matrimonial;
pub use self::statut_matrimonial::{StatutMatrimonial, StatutMatrimonialInput};

mod role;
pub use self::role::{Role, RoleInput};

mod utilisateur;
pub use self::utilisateur::{TypeUtilisateur, Utilisateur, UtilisateurInput};

mod message;
pub use self::message::{Message, MessageInput};

mod favori;
pub use self::favori::{Favori, FavoriInput, TypeElement};

mod produit;
pub use self::produit::{Produit, ProduitInput};

mod echange;
pub use self::echange::{Echange, EchangeInput, StatutEchange};
