pub mod classroom;

pub use classroom::Entity as ClassroomEntity;
