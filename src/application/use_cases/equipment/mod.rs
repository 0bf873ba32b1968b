//! Equipment Use Cases

mod get_equipment_by_id;

pub use get_equipment_by_id::GetEquipmentByIdUseCase;
