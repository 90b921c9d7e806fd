//! The operation table: one named query constant per backend mutation.
//!
//! The reference tooling repeated these query strings in every script; they
//! are centralized here so every tool sends byte-identical queries.

/// A named GraphQL operation against the marketplace backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create a marketplace account.
    Register,
    /// Exchange credentials for a session token.
    Login,
    /// Create a product under the authenticated supplier.
    CreateProduct,
    /// Change the authenticated account's type.
    UpdateAccountType,
}

impl Operation {
    /// Operation name, used in logs and error context.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Login => "Login",
            Self::CreateProduct => "CreateProduct",
            Self::UpdateAccountType => "UpdateUser",
        }
    }

    /// Field under `data` that carries this operation's payload.
    #[must_use]
    pub const fn payload_field(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::CreateProduct => "createProduct",
            Self::UpdateAccountType => "updateUser",
        }
    }

    /// The query string sent on the wire.
    #[must_use]
    pub const fn query(self) -> &'static str {
        match self {
            Self::Register => REGISTER,
            Self::Login => LOGIN,
            Self::CreateProduct => CREATE_PRODUCT,
            Self::UpdateAccountType => UPDATE_ACCOUNT_TYPE,
        }
    }
}

const REGISTER: &str = r"
mutation Register($firstName: String!, $lastName: String!, $password1: String!, $password2: String!, $email: String!, $accountType: String!, $termsAccepted: Boolean!) {
  register(
    firstName: $firstName,
    lastName: $lastName,
    password1: $password1,
    password2: $password2,
    email: $email,
    accountType: $accountType,
    termsAccepted: $termsAccepted
  ) {
    success
    token
    refreshToken
    errors
  }
}
";

const LOGIN: &str = r"
mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    token
    refreshToken
    user {
      id
      email
      firstName
      lastName
      accountType
    }
  }
}
";

const CREATE_PRODUCT: &str = r"
mutation CreateProduct(
  $name: String!,
  $description: String!,
  $price: Float!,
  $discountPrice: Float,
  $imagesUrl: [String!]!,
  $category: String!,
  $subcategory: String,
  $stockQuantity: Int!,
  $tags: [String!],
  $specifications: String,
  $dimensions: String,
  $weight: Float,
  $materials: [String!],
  $careInstructions: String
) {
  createProduct(
    name: $name,
    description: $description,
    price: $price,
    discountPrice: $discountPrice,
    imagesUrl: $imagesUrl,
    category: $category,
    subcategory: $subcategory,
    stockQuantity: $stockQuantity,
    tags: $tags,
    specifications: $specifications,
    dimensions: $dimensions,
    weight: $weight,
    materials: $materials,
    careInstructions: $careInstructions
  ) {
    success
    message
    product {
      id
      name
      price
      category
    }
  }
}
";

const UPDATE_ACCOUNT_TYPE: &str = r"
mutation UpdateUser($accountType: String!) {
  updateUser(accountType: $accountType) {
    success
    message
    user {
      id
      email
      firstName
      lastName
      accountType
    }
  }
}
";
