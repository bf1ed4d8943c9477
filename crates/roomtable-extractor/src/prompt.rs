//! Default backend instructions
//!
//! These are configuration defaults, not process-wide state: the pipeline
//! reads whichever instructions its [`PipelineConfig`](crate::PipelineConfig)
//! carries.

pub(crate) const CONDENSE_INSTRUCTION: &str = r#"Extract only the relevant information about rooms, including room details, configurations, prices, seasons, dates, and related data. Remove any unnecessary or unrelated content. Focus on the following fields:
- Room configurations (e.g. Queen bed, Queen bed & 2 x set of bunks, King / Queen, 2 x Bunk Beds, 2 x Double Beds)
- Room name (e.g. Airlie Beach: Deluxe Bali Villa Cabin 1-2 people)
- Dates (season start and end)
- Prices (RRP adult cost)
- Supplier and property details
- Item-specific data
- Property address (this is where the room is located)
- Supplier name and address (this is the company that is providing the room)

Be concise and ensure that all extracted data is relevant to the room information."#;

pub(crate) const TABULATE_INSTRUCTION: &str = r#"Return any information related to rooms or properties.
Be verbose and very detailed. The more information related to properties and rooms the better.

Make sure for each property, if it is there, to directly copy the text that includes the dates for peak and off peak season."#;
