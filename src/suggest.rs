mod scheduler;

pub use scheduler::{
    AutoSuggestSignature, Decision, SchedulerConfig, SchedulerState, SkipReason, SuggestError,
    SuggestScheduler, SuggestTrigger, TriggerReason,
};
