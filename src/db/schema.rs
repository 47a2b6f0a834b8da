//! Diesel schema for companies and their job postings.

diesel::table! {
    /// Company profiles keyed by handle.
    companies (handle) {
        /// Unique company handle.
        #[max_length = 25]
        handle -> Varchar,
        /// Unique display name.
        name -> Text,
        /// Optional head count.
        num_employees -> Nullable<Int4>,
        /// Free-form description.
        description -> Text,
        /// Optional logo location.
        logo_url -> Nullable<Text>,
    }
}

diesel::table! {
    /// Job postings owned by companies.
    jobs (id) {
        /// Serial identifier.
        id -> Int4,
        /// Job title.
        title -> Text,
        /// Optional salary.
        salary -> Nullable<Int4>,
        /// Optional equity fraction.
        equity -> Nullable<Numeric>,
        /// Owning company handle.
        #[max_length = 25]
        company_handle -> Varchar,
    }
}

diesel::joinable!(jobs -> companies (company_handle));
diesel::allow_tables_to_appear_in_same_query!(companies, jobs);
