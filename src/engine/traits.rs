pub mod packet_processor;
